//! Types for node RPC requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use zt_primitives::chainhash::Hash;

use crate::error::RpcError;

/// Configuration for the node RPC client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Endpoint URL, including scheme and port.
    pub host: String,
    /// RPC user for basic auth.
    pub user: String,
    /// RPC password for basic auth.
    pub password: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "http://127.0.0.1:18232".to_string(),
            user: String::new(),
            password: String::new(),
            timeout_secs: 30,
        }
    }
}

impl RpcConfig {
    /// Check the configuration's shape: an http(s) host and a non-zero
    /// timeout.
    pub fn validate(&self) -> Result<(), RpcError> {
        let rest = self
            .host
            .strip_prefix("http://")
            .or_else(|| self.host.strip_prefix("https://"))
            .ok_or_else(|| {
                RpcError::InvalidConfig(format!(
                    "host '{}' must start with http:// or https://",
                    self.host
                ))
            })?;
        if rest.is_empty() {
            return Err(RpcError::InvalidConfig("host is missing an authority".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(RpcError::InvalidConfig("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }
}

/// The chain tip as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeight {
    /// Height of the best block.
    pub number: u32,
    /// Hash of the best block.
    pub hash: Hash,
}

/// Balance of an address as reported by `getaddressbalance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AddressBalance {
    /// Current balance in zatoshi.
    pub balance: u64,
    /// Total ever received in zatoshi.
    pub received: u64,
}

/// JSON-RPC 1.0 request envelope.
#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Vec<Value>,
}

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// The `error` member of a failed call.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcErrorObject {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
