//! Error types for node RPC operations.

use zt_transaction::TransactionError;

/// Errors that can occur when talking to the node.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// HTTP request failed or timed out.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize or deserialize data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error ({code}): {message}")]
    Rpc {
        /// The JSON-RPC error code.
        code: i64,
        /// The node's error message.
        message: String,
    },

    /// The reply was well-formed JSON but not the expected shape.
    #[error("invalid response to {method}: {reason}")]
    InvalidResponse {
        /// The method that was called.
        method: String,
        /// What was wrong with the reply.
        reason: String,
    },

    /// The client configuration failed shape validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<RpcError> for TransactionError {
    fn from(e: RpcError) -> Self {
        TransactionError::Transport(e.to_string())
    }
}
