//! Report rendering: aligned human-readable tables or a single JSON object.

use crate::errors::AppResult;
use crate::types::{format_sol, WalletReport};

/// Render the report as pretty-printed JSON (the `--json` surface)
pub fn render_json(report: &WalletReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the report as human-readable text with aligned columns
pub fn render_human(report: &WalletReport) -> String {
    let mut out = String::new();

    out.push_str("Solana Wallet Inspector\n");
    out.push_str(&"=".repeat(25));
    out.push('\n');
    out.push_str(&format!("Address: {}\n", report.address));
    out.push_str(&format!(
        "SOL Balance: {} SOL ({} lamports)\n",
        format_sol(report.sol_balance_sol),
        report.sol_balance_lamports
    ));

    out.push_str(&format!("SPL Tokens: {}\n", report.tokens.len()));
    if !report.tokens.is_empty() {
        let mint_w = column_width("Mint", report.tokens.iter().map(|t| t.mint.len()));
        let acct_w = column_width(
            "Token Account",
            report.tokens.iter().map(|t| t.token_account.len()),
        );

        out.push_str(&format!(
            "{:<mint_w$}  {:<acct_w$}  {:>12}  {:>3}  {:>12}\n",
            "Mint", "Token Account", "Amount Raw", "Dec", "UI Amount"
        ));
        for token in &report.tokens {
            out.push_str(&format!(
                "{:<mint_w$}  {:<acct_w$}  {:>12}  {:>3}  {:>12}\n",
                token.mint, token.token_account, token.amount_raw, token.decimals, token.ui_amount
            ));
        }
    }

    out.push_str(&format!(
        "Recent Transactions: {}\n",
        report.transactions.len()
    ));
    if !report.transactions.is_empty() {
        let sig_w = column_width(
            "Signature",
            report.transactions.iter().map(|t| t.signature.len()),
        );

        out.push_str(&format!(
            "{:<sig_w$}  {:<25}  {:<10}  {}\n",
            "Signature", "Block Time (UTC)", "Status", "Err"
        ));
        for tx in &report.transactions {
            let block_time = tx.block_time.as_deref().unwrap_or("N/A");
            let status = tx
                .confirmation_status
                .map(|s| s.as_str())
                .unwrap_or_default();
            out.push_str(&format!(
                "{:<sig_w$}  {:<25}  {:<10}  {}\n",
                tx.signature, block_time, status, tx.err
            ));
        }
    }

    out
}

fn column_width(header: &str, values: impl Iterator<Item = usize>) -> usize {
    values.fold(header.len(), usize::max)
}
