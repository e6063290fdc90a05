//! Retry logic utilities for RPC operations
//!
//! Helper functions for the exponential backoff schedule used by the RPC
//! client when an endpoint fails transiently.

use std::time::Duration;

/// Calculate next backoff duration using exponential backoff with a maximum cap
///
/// Pure helper implementing the exponential backoff formula:
/// `new_backoff = min(current_backoff * multiplier, max_backoff)`
///
/// # Example
/// ```
/// use std::time::Duration;
/// use sol_inspect::rpc::calculate_next_backoff;
///
/// let backoff = Duration::from_millis(100);
/// let next = calculate_next_backoff(backoff, 2.0, 30);
/// assert_eq!(next, Duration::from_millis(200));
/// ```
pub fn calculate_next_backoff(
    current_backoff: Duration,
    multiplier: f64,
    max_backoff_seconds: u64,
) -> Duration {
    Duration::from_millis((current_backoff.as_millis() as f64 * multiplier) as u64)
        .min(Duration::from_secs(max_backoff_seconds))
}
