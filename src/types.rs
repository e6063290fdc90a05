//! Value records produced by a wallet inspection, plus the lamport/SOL and
//! raw-token-amount arithmetic they rely on.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// SPL Token program id - owner filter for token account enumeration
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Commitment level requested for ledger state. The same wire strings are
/// used for the confirmation status reported on signatures, so this enum
/// serves both roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One SPL token holding of the inspected wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenHolding {
    /// Mint address of the token
    pub mint: String,
    /// Token account holding the balance
    pub token_account: String,
    /// Raw amount as an arbitrary-precision decimal string
    pub amount_raw: String,
    /// Decimal places of the mint
    pub decimals: u8,
    /// Raw amount scaled by 10^-decimals
    pub ui_amount: String,
}

/// One entry of the wallet's recent transaction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub signature: String,
    /// Block time as ISO-8601 UTC, absent when the ledger has none
    pub block_time: Option<String>,
    pub confirmation_status: Option<Commitment>,
    /// Compact-JSON error summary; empty string for successful transactions
    pub err: String,
}

/// Complete inspection report for one wallet, also the `--json` schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletReport {
    pub address: String,
    pub sol_balance_lamports: u64,
    pub sol_balance_sol: f64,
    pub tokens: Vec<TokenHolding>,
    pub transactions: Vec<TransactionSummary>,
}

/// Convert a lamport count to SOL (1 SOL = 1e9 lamports)
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Format a SOL amount at full lamport precision (9 decimals), trimming
/// trailing zeros.
///
/// # Examples
/// ```
/// use sol_inspect::types::format_sol;
///
/// assert_eq!(format_sol(1.5), "1.5");
/// assert_eq!(format_sol(0.000000001), "0.000000001");
/// assert_eq!(format_sol(2.0), "2");
/// ```
pub fn format_sol(sol: f64) -> String {
    let text = format!("{:.9}", sol);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Scale a raw integer amount string by 10^-decimals exactly, without going
/// through floating point.
///
/// The raw amount is arbitrary precision, so the scaling is done by string
/// manipulation: pad with leading zeros as needed, insert the decimal point,
/// trim trailing zeros from the fraction. Returns `None` when the input is
/// not a plain ASCII digit string.
///
/// # Examples
/// ```
/// use sol_inspect::types::scale_raw_amount;
///
/// assert_eq!(scale_raw_amount("123456", 3).as_deref(), Some("123.456"));
/// assert_eq!(scale_raw_amount("5", 2).as_deref(), Some("0.05"));
/// assert_eq!(scale_raw_amount("1000000", 6).as_deref(), Some("1"));
/// assert_eq!(scale_raw_amount("0", 9).as_deref(), Some("0"));
/// assert_eq!(scale_raw_amount("1.5", 2), None);
/// ```
pub fn scale_raw_amount(raw: &str, decimals: u8) -> Option<String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = raw.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    if decimals == 0 {
        return Some(digits.to_string());
    }

    let decimals = decimals as usize;
    let (whole, frac) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (&digits[..split], &digits[split..])
    } else {
        ("", &digits[..])
    };

    let whole = if whole.is_empty() { "0" } else { whole };
    let mut frac = format!("{:0>width$}", frac, width = decimals);
    while frac.ends_with('0') {
        frac.pop();
    }

    if frac.is_empty() {
        Some(whole.to_string())
    } else {
        Some(format!("{}.{}", whole, frac))
    }
}
