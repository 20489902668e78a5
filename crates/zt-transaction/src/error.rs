/// Error types for transaction operations.
///
/// Validation variants (`InvalidAddress`, `AmountTooLarge`, `MemoTooLong`,
/// `InsufficientFunds`) are raised before any digest is computed.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// An address failed checksum, length or network-prefix validation.
    #[error("invalid {field} address '{address}': {reason}")]
    InvalidAddress {
        field: &'static str,
        address: String,
        reason: String,
    },
    /// An amount exceeds what the transaction format or policy allows.
    #[error("amount {amount} exceeds maximum {max}")]
    AmountTooLarge { amount: u64, max: u64 },
    /// The memo does not fit in a data-carrier output.
    #[error("memo is {len} bytes, at most {max} allowed")]
    MemoTooLong { len: usize, max: usize },
    /// Selected inputs do not cover amount plus fee.
    #[error("insufficient funds: {available} available, {required} required")]
    InsufficientFunds { available: u64, required: u64 },
    /// A collaborator (UTXO source or broadcaster) failed.
    #[error("transport error: {0}")]
    Transport(String),
    /// The transaction structure is invalid (e.g. zero amount, missing inputs).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),
    /// An error occurred while signing an input.
    #[error("signing error: {0}")]
    SigningError(String),
    /// An error occurred during binary/hex serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),
    /// An underlying script error (forwarded from `zt-script`).
    #[error("script error: {0}")]
    Script(#[from] zt_script::ScriptError),
    /// An underlying primitives error (forwarded from `zt-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] zt_primitives::PrimitivesError),
}
