use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::output;
use crate::rpc::SolanaRpcClient;
use crate::types::Commitment;
use crate::wallet;
use clap::Args;
use tracing::info;

/// Inspect a Solana wallet: SOL balance, SPL tokens, recent transactions
#[derive(Args)]
pub struct InspectCommand {
    /// Solana wallet address (base58)
    pub address: String,

    /// RPC endpoint URL (can be specified multiple times, overrides config)
    #[arg(long = "rpc")]
    pub rpc: Vec<String>,

    /// Number of recent transactions to fetch
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Commitment level for all queries
    #[arg(long, value_enum)]
    pub commitment: Option<Commitment>,

    /// Output a single JSON object instead of human-readable text
    #[arg(long)]
    pub json: bool,

    /// Skip the SPL token section
    #[arg(long)]
    pub no_tokens: bool,

    /// Skip the transaction history section
    #[arg(long)]
    pub no_txs: bool,
}

impl InspectCommand {
    pub async fn run(&self) -> AppResult<()> {
        // Input validation happens before any network traffic
        wallet::validate_address(&self.address)?;

        // Load configuration, then apply CLI overrides
        let app_config = AppConfig::load().map_err(|e| AppError::Config(e.to_string()))?;
        let mut rpc_config = app_config.rpc;

        if !self.rpc.is_empty() {
            rpc_config.endpoints = self.rpc.clone();
        }
        if let Some(timeout) = self.timeout {
            rpc_config.timeout_seconds = timeout;
        }
        if let Some(commitment) = self.commitment {
            rpc_config.commitment = commitment;
        }

        info!(
            address = %self.address,
            endpoints = rpc_config.endpoints.len(),
            commitment = %rpc_config.commitment,
            "starting wallet inspection"
        );

        let client = SolanaRpcClient::new(rpc_config)?;
        let report = wallet::inspect(
            &client,
            &self.address,
            self.limit,
            !self.no_tokens,
            !self.no_txs,
        )
        .await?;

        if self.json {
            println!("{}", output::render_json(&report)?);
        } else {
            print!("{}", output::render_human(&report));
        }

        Ok(())
    }
}
