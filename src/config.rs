use crate::types::Commitment;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

/// Default public mainnet endpoints, attempted in order
pub const DEFAULT_ENDPOINTS: [&str; 2] = [
    "https://api.mainnet-beta.solana.com",
    "https://solana.drpc.org",
];

/// Application configuration loaded from sol-inspect.toml or environment
/// variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub rpc: RpcConfig,
}

/// Solana RPC configuration: endpoint list plus retry/backoff tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Ordered endpoint list; earlier entries are preferred
    pub endpoints: Vec<String>,
    pub timeout_seconds: u64,
    /// Attempts per endpoint before failing over
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
    pub commitment: Commitment,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            timeout_seconds: 10,
            max_retries: 4,
            initial_backoff_ms: 500,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 8,
            commitment: Commitment::Confirmed,
        }
    }
}

impl AppConfig {
    /// Load configuration from sol-inspect.toml and environment variables.
    /// Environment variables (SOL_INSPECT_*) take precedence over file
    /// configuration; CLI flags override both at the command layer.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = RpcConfig::default();
        let config = Config::builder()
            .set_default("rpc.endpoints", defaults.endpoints)?
            .set_default("rpc.timeout_seconds", defaults.timeout_seconds)?
            .set_default("rpc.max_retries", defaults.max_retries as i64)?
            .set_default("rpc.initial_backoff_ms", defaults.initial_backoff_ms)?
            .set_default("rpc.backoff_multiplier", defaults.backoff_multiplier)?
            .set_default("rpc.max_backoff_seconds", defaults.max_backoff_seconds)?
            .set_default("rpc.commitment", defaults.commitment.as_str())?
            // Load from sol-inspect.toml if it exists
            .add_source(File::with_name("sol-inspect").required(false))
            // SOL_INSPECT_RPC__TIMEOUT_SECONDS etc. override file values
            .add_source(
                config::Environment::with_prefix("SOL_INSPECT")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("rpc.endpoints"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Built-in defaults without touching the filesystem or environment
    pub fn get_defaults() -> Self {
        Self {
            rpc: RpcConfig::default(),
        }
    }
}
