use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Solana RPC operations
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input (malformed address, bad flag values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error: invalid input exits 2, everything
    /// else (RPC, config, I/O) exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}

/// RPC error types
#[derive(Error, Debug)]
pub enum RpcError {
    /// Network-level failure talking to an endpoint (DNS, connect, TLS)
    #[error("Transport error from {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    /// Endpoint answered with a non-success HTTP status
    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {timeout_seconds}s from {endpoint}")]
    Timeout {
        endpoint: String,
        timeout_seconds: u64,
    },

    /// Endpoint returned a body that is not a valid JSON-RPC response
    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },

    /// JSON-RPC level error member - a definitive answer, never retried
    #[error("RPC error {code} from {endpoint}: {message}")]
    Rpc {
        endpoint: String,
        code: i64,
        message: String,
    },

    /// Every configured endpoint was exhausted
    #[error("All RPC endpoints failed, last error: {last_error}")]
    AllEndpointsFailed { last_error: String },

    /// RPC result did not match the expected shape for the method
    #[error("Invalid response for {method}: {message}")]
    InvalidResponse { method: String, message: String },
}

impl RpcError {
    /// Whether the failure is transient and worth retrying on the same
    /// endpoint. A JSON-RPC error member is a semantic answer about the
    /// request itself, so it is terminal.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            RpcError::Transport { .. }
                | RpcError::HttpStatus { .. }
                | RpcError::Timeout { .. }
                | RpcError::MalformedResponse { .. }
        )
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON error: {}", err))
    }
}
