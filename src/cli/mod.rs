use crate::errors::AppResult;
use clap::Parser;

pub mod commands;

/// Solana Wallet Inspector
#[derive(Parser)]
#[command(name = "sol-inspect")]
#[command(about = "Solana Wallet Inspector - balances, SPL tokens and recent transactions")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub inspect: commands::inspect::InspectCommand,
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    cli.inspect.run().await
}
