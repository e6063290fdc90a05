//! End-to-end inspection flow against stub endpoints
//!
//! Drives `wallet::inspect` through all three RPC call sites with realistic
//! jsonParsed payloads and checks the assembled report.

use crate::common::{method_router, spawn_stub_endpoint, test_rpc_config};
use anyhow::Result;
use serde_json::json;
use sol_inspect::rpc::SolanaRpcClient;
use sol_inspect::types::Commitment;
use sol_inspect::wallet;

const ADDRESS: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";
const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

fn full_wallet_routes() -> Vec<(&'static str, serde_json::Value)> {
    vec![
        (
            "getBalance",
            json!({ "context": { "slot": 1 }, "value": 2_500_000_000u64 }),
        ),
        (
            "getTokenAccountsByOwner",
            json!({
                "context": { "slot": 1 },
                "value": [
                    {
                        "pubkey": "9vpsmXhZYMpvhCKiVoX5U8b1iKpfwJaVpRzqUmAUjWvS",
                        "account": {
                            "data": {
                                "parsed": {
                                    "info": {
                                        "mint": USDC_MINT,
                                        "tokenAmount": {
                                            "amount": "1250000",
                                            "decimals": 6,
                                            "uiAmountString": "1.25"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    // Incomplete entry - must be skipped, not fail the run
                    { "pubkey": "FvN5dGeidoJkd2hL4mpT4Kk1kVnJGaTsCoxFq4A1cjVJ", "account": {} }
                ]
            }),
        ),
        (
            "getSignaturesForAddress",
            json!([
                {
                    "signature": "5SzR2vEtEnhDiBjuEC8PvfikEAShJZyAnpuQ1bRnYurF",
                    "slot": 200000000u64,
                    "blockTime": 1_700_000_000,
                    "confirmationStatus": "finalized",
                    "err": null
                },
                {
                    "signature": "2xCvB4wTq8kNJf9sYtRkD5mH7pLgQcEaUuXnWvZrShGo",
                    "slot": 199999999u64,
                    "blockTime": null,
                    "confirmationStatus": "confirmed",
                    "err": { "InstructionError": [0, { "Custom": 6000 }] }
                }
            ]),
        ),
    ]
}

#[tokio::test]
async fn test_full_inspection_builds_complete_report() -> Result<()> {
    let endpoint = spawn_stub_endpoint(method_router(&full_wallet_routes())).await;
    let client = SolanaRpcClient::new(test_rpc_config(vec![endpoint.url.clone()]))?;

    let report = wallet::inspect(&client, ADDRESS, 10, true, true).await?;

    assert_eq!(report.address, ADDRESS);
    assert_eq!(report.sol_balance_lamports, 2_500_000_000);
    assert_eq!(report.sol_balance_sol, 2.5);

    assert_eq!(report.tokens.len(), 1, "incomplete entry must be skipped");
    assert_eq!(report.tokens[0].mint, USDC_MINT);
    assert_eq!(report.tokens[0].ui_amount, "1.25");

    assert_eq!(report.transactions.len(), 2);
    assert_eq!(
        report.transactions[0].block_time.as_deref(),
        Some("2023-11-14T22:13:20Z")
    );
    assert_eq!(
        report.transactions[0].confirmation_status,
        Some(Commitment::Finalized)
    );
    assert_eq!(report.transactions[0].err, "");
    assert_eq!(report.transactions[1].block_time, None);
    assert!(report.transactions[1].err.contains("InstructionError"));

    // One request per call site
    assert_eq!(endpoint.hits(), 3);
    Ok(())
}

#[tokio::test]
async fn test_skipped_sections_are_not_fetched() {
    let endpoint = spawn_stub_endpoint(method_router(&full_wallet_routes())).await;
    let client = SolanaRpcClient::new(test_rpc_config(vec![endpoint.url.clone()])).unwrap();

    let report = wallet::inspect(&client, ADDRESS, 10, false, false)
        .await
        .unwrap();

    assert_eq!(report.sol_balance_lamports, 2_500_000_000);
    assert!(report.tokens.is_empty());
    assert!(report.transactions.is_empty());
    // Only the balance call went out
    assert_eq!(endpoint.hits(), 1);
}

#[tokio::test]
async fn test_failing_requested_section_fails_the_run() {
    // Router knows getBalance only; token enumeration gets a JSON-RPC error
    let endpoint = spawn_stub_endpoint(method_router(&[(
        "getBalance",
        json!({ "context": { "slot": 1 }, "value": 1u64 }),
    )]))
    .await;
    let client = SolanaRpcClient::new(test_rpc_config(vec![endpoint.url.clone()])).unwrap();

    let result = wallet::inspect(&client, ADDRESS, 10, true, true).await;
    assert!(
        result.is_err(),
        "a failing requested section must not be silently dropped"
    );
}
