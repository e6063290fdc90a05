//! Solana JSON-RPC integration module
//!
//! - **Client** - async JSON-RPC client with per-endpoint retry and ordered
//!   endpoint failover
//! - **Retry** - exponential backoff helpers
//!
//! The client speaks plain JSON-RPC 2.0 over HTTP POST via `reqwest`; the
//! wallet-level call sites live in [`crate::wallet`].

pub mod client;
pub mod retry;

pub use client::SolanaRpcClient;
pub use retry::calculate_next_backoff;
