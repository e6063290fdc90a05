use crate::config::RpcConfig;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::calculate_next_backoff;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, warn};

/// Solana JSON-RPC client with per-endpoint retry and ordered failover
///
/// One request is in flight at a time. Each endpoint is tried up to
/// `max_retries` times with exponential backoff between attempts; when an
/// endpoint's retries are exhausted the client moves to the next one. The
/// first valid response short-circuits the remaining endpoints.
pub struct SolanaRpcClient {
    http: reqwest::Client,
    config: RpcConfig,
}

impl SolanaRpcClient {
    /// Create a new RPC client with a bounded per-request timeout
    pub fn new(config: RpcConfig) -> RpcResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RpcError::Transport {
                endpoint: String::new(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Send one JSON-RPC call, retrying and failing over per the configured
    /// policy, and return the `result` member of the response.
    ///
    /// A JSON-RPC `error` member is a definitive answer about the request
    /// itself (e.g. invalid params); it is surfaced immediately without
    /// retry or failover.
    pub async fn call(&self, method: &str, params: Value) -> RpcResult<Value> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let mut last_error: Option<RpcError> = None;

        for endpoint in &self.config.endpoints {
            let mut attempts = 0;
            let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);

            while attempts < self.config.max_retries {
                match self.attempt(endpoint, &payload).await {
                    Ok(result) => {
                        if attempts > 0 {
                            debug!(
                                method,
                                endpoint,
                                attempts = attempts + 1,
                                "RPC call succeeded after retries"
                            );
                        }
                        return Ok(result);
                    }
                    Err(e) if !e.is_transient() => {
                        debug!(method, endpoint, error = %e, "definitive RPC error; not retrying");
                        return Err(e);
                    }
                    Err(e) => {
                        attempts += 1;
                        if attempts >= self.config.max_retries {
                            error!(
                                method,
                                endpoint,
                                attempts,
                                error = %e,
                                "endpoint exhausted retries, failing over"
                            );
                            last_error = Some(e);
                            break;
                        }

                        warn!(
                            method,
                            endpoint,
                            attempt = attempts,
                            backoff_ms = backoff.as_millis() as u64,
                            error = %e,
                            "RPC attempt failed, retrying"
                        );
                        sleep(backoff).await;
                        backoff = calculate_next_backoff(
                            backoff,
                            self.config.backoff_multiplier,
                            self.config.max_backoff_seconds,
                        );
                    }
                }
            }
        }

        Err(RpcError::AllEndpointsFailed {
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no endpoints configured".to_string()),
        })
    }

    /// One HTTP POST attempt against one endpoint
    async fn attempt(&self, endpoint: &str, payload: &Value) -> RpcResult<Value> {
        let response = self
            .http
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| self.classify_reqwest_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body: Value = response
            .json()
            .await
            .map_err(|e| self.classify_reqwest_error(endpoint, e))?;

        if let Some(error) = body.get("error") {
            if !error.is_null() {
                return Err(RpcError::Rpc {
                    endpoint: endpoint.to_string(),
                    code: error.get("code").and_then(Value::as_i64).unwrap_or(0),
                    message: error
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown error")
                        .to_string(),
                });
            }
        }

        match body.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(RpcError::MalformedResponse {
                endpoint: endpoint.to_string(),
                message: "response has neither result nor error".to_string(),
            }),
        }
    }

    fn classify_reqwest_error(&self, endpoint: &str, error: reqwest::Error) -> RpcError {
        if error.is_timeout() {
            RpcError::Timeout {
                endpoint: endpoint.to_string(),
                timeout_seconds: self.config.timeout_seconds,
            }
        } else if error.is_decode() {
            RpcError::MalformedResponse {
                endpoint: endpoint.to_string(),
                message: error.to_string(),
            }
        } else {
            RpcError::Transport {
                endpoint: endpoint.to_string(),
                message: error.to_string(),
            }
        }
    }
}
