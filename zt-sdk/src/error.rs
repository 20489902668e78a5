//! Error type for SDK operations.

use zt_primitives::PrimitivesError;
use zt_rpc::RpcError;
use zt_script::ScriptError;
use zt_transaction::TransactionError;

/// Errors surfaced by the [`Vault`](crate::Vault) facade.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// A public key was not 33 bytes (compressed SEC1).
    #[error("public key must be 33 bytes long, got {0}")]
    InvalidPubkeyLength(usize),

    /// A WIF key was encoded for the other network.
    #[error("key is encoded for version 0x{got:02x}, expected 0x{expected:02x}")]
    WrongKeyNetwork {
        /// The version byte of the configured network.
        expected: u8,
        /// The version byte found in the key.
        got: u8,
    },

    /// The configuration could not be parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// The global logger could not be installed.
    #[error("logger error: {0}")]
    Logger(String),

    /// A node RPC call failed.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Building or signing a transaction failed.
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// An address or script error.
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// A key or encoding error.
    #[error(transparent)]
    Primitives(#[from] PrimitivesError),
}
