//! Wallet-level call sites built on the RPC client: native balance, SPL
//! token enumeration and recent signature history, each mapped into the
//! typed records from [`crate::types`].

use crate::errors::{AppError, AppResult, RpcError, RpcResult};
use crate::rpc::SolanaRpcClient;
use crate::types::{
    Commitment, TokenHolding, TransactionSummary, WalletReport, TOKEN_PROGRAM_ID,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

/// `getBalance` result envelope (`{ context, value }`)
#[derive(Debug, Deserialize)]
struct BalanceResult {
    value: u64,
}

/// `getTokenAccountsByOwner` result envelope
#[derive(Debug, Deserialize)]
struct TokenAccountsResult {
    #[serde(default)]
    value: Vec<TokenAccountEntry>,
}

#[derive(Debug, Deserialize)]
struct TokenAccountEntry {
    pubkey: Option<String>,
    account: Option<TokenAccountData>,
}

#[derive(Debug, Deserialize)]
struct TokenAccountData {
    data: Option<ParsedAccountData>,
}

#[derive(Debug, Deserialize)]
struct ParsedAccountData {
    parsed: Option<ParsedTokenInfo>,
}

#[derive(Debug, Deserialize)]
struct ParsedTokenInfo {
    info: Option<TokenInfo>,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    mint: Option<String>,
    #[serde(rename = "tokenAmount")]
    token_amount: Option<TokenAmount>,
}

#[derive(Debug, Deserialize)]
struct TokenAmount {
    amount: Option<String>,
    decimals: Option<u8>,
    #[serde(rename = "uiAmountString")]
    ui_amount_string: Option<String>,
}

/// One entry of the `getSignaturesForAddress` result array
#[derive(Debug, Deserialize)]
struct SignatureEntry {
    signature: String,
    #[serde(rename = "blockTime")]
    block_time: Option<i64>,
    #[serde(rename = "confirmationStatus")]
    confirmation_status: Option<Commitment>,
    err: Option<Value>,
}

/// Fetch the wallet's native balance in lamports
pub async fn get_balance(
    client: &SolanaRpcClient,
    address: &str,
    commitment: Commitment,
) -> RpcResult<u64> {
    let result = client
        .call(
            "getBalance",
            json!([address, { "commitment": commitment.as_str() }]),
        )
        .await?;

    let balance: BalanceResult =
        serde_json::from_value(result).map_err(|e| RpcError::InvalidResponse {
            method: "getBalance".to_string(),
            message: e.to_string(),
        })?;

    debug!(address, lamports = balance.value, "fetched native balance");
    Ok(balance.value)
}

/// Enumerate the wallet's SPL token accounts under the Token program
///
/// Entries missing any of pubkey, mint, raw amount or decimals are skipped
/// rather than failing the whole listing.
pub async fn get_token_holdings(
    client: &SolanaRpcClient,
    address: &str,
    commitment: Commitment,
) -> RpcResult<Vec<TokenHolding>> {
    let result = client
        .call(
            "getTokenAccountsByOwner",
            json!([
                address,
                { "programId": TOKEN_PROGRAM_ID },
                { "encoding": "jsonParsed", "commitment": commitment.as_str() }
            ]),
        )
        .await?;

    let accounts: TokenAccountsResult =
        serde_json::from_value(result).map_err(|e| RpcError::InvalidResponse {
            method: "getTokenAccountsByOwner".to_string(),
            message: e.to_string(),
        })?;

    let holdings: Vec<TokenHolding> = accounts
        .value
        .into_iter()
        .filter_map(parse_token_account)
        .collect();

    debug!(address, count = holdings.len(), "fetched token holdings");
    Ok(holdings)
}

/// Fetch recent transaction signatures for the wallet, newest first
pub async fn get_signatures(
    client: &SolanaRpcClient,
    address: &str,
    limit: usize,
    commitment: Commitment,
) -> RpcResult<Vec<TransactionSummary>> {
    let result = client
        .call(
            "getSignaturesForAddress",
            json!([address, { "limit": limit, "commitment": commitment.as_str() }]),
        )
        .await?;

    let entries: Vec<SignatureEntry> =
        serde_json::from_value(result).map_err(|e| RpcError::InvalidResponse {
            method: "getSignaturesForAddress".to_string(),
            message: e.to_string(),
        })?;

    let transactions = entries
        .into_iter()
        .map(|entry| TransactionSummary {
            signature: entry.signature,
            block_time: entry.block_time.and_then(iso_time_from_blocktime),
            confirmation_status: entry.confirmation_status,
            err: err_summary(entry.err.as_ref()),
        })
        .collect();

    Ok(transactions)
}

/// Run a full inspection: balance always, token and transaction sections
/// unless skipped. A failing requested section fails the run - partial
/// results are never silently dropped.
pub async fn inspect(
    client: &SolanaRpcClient,
    address: &str,
    limit: usize,
    with_tokens: bool,
    with_transactions: bool,
) -> AppResult<WalletReport> {
    let commitment = client.config().commitment;

    let sol_balance_lamports = get_balance(client, address, commitment).await?;

    let tokens = if with_tokens {
        get_token_holdings(client, address, commitment).await?
    } else {
        Vec::new()
    };

    let transactions = if with_transactions {
        get_signatures(client, address, limit, commitment).await?
    } else {
        Vec::new()
    };

    info!(
        address,
        lamports = sol_balance_lamports,
        tokens = tokens.len(),
        transactions = transactions.len(),
        "wallet inspection complete"
    );

    Ok(WalletReport {
        address: address.to_string(),
        sol_balance_lamports,
        sol_balance_sol: crate::types::lamports_to_sol(sol_balance_lamports),
        tokens,
        transactions,
    })
}

/// Validate a base58 wallet address (must decode to 32 bytes)
pub fn validate_address(address: &str) -> AppResult<()> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|e| AppError::InvalidInput(format!("Invalid address: {}", e)))?;

    if decoded.len() != 32 {
        return Err(AppError::InvalidInput(format!(
            "Invalid address length: decoded to {} bytes, expected 32",
            decoded.len()
        )));
    }

    Ok(())
}

fn parse_token_account(entry: TokenAccountEntry) -> Option<TokenHolding> {
    let pubkey = entry.pubkey?;
    let info = entry.account?.data?.parsed?.info?;
    let mint = info.mint?;
    let token_amount = info.token_amount?;
    let amount_raw = token_amount.amount?;
    let decimals = token_amount.decimals?;

    // The RPC's uiAmountString is authoritative when present; fall back to
    // exact local scaling of the raw amount. An amount that is not a digit
    // string cannot be scaled, so the entry is skipped like any other
    // incomplete one.
    let ui_amount = match token_amount.ui_amount_string {
        Some(ui_amount) => ui_amount,
        None => crate::types::scale_raw_amount(&amount_raw, decimals)?,
    };

    Some(TokenHolding {
        mint,
        token_account: pubkey,
        amount_raw,
        decimals,
        ui_amount,
    })
}

/// Render a block time as ISO-8601 UTC; out-of-range timestamps are dropped
fn iso_time_from_blocktime(block_time: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(block_time, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Compact-JSON summary of a transaction error; empty string when none
fn err_summary(err: Option<&Value>) -> String {
    match err {
        None | Some(Value::Null) => String::new(),
        Some(value) => value.to_string(),
    }
}
