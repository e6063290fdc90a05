//! Solana Wallet Inspector
//!
//! Read-only inspection of Solana wallets over public JSON-RPC endpoints,
//! with ordered endpoint failover and exponential-backoff retry.

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod rpc;
pub mod types;
pub mod wallet;
