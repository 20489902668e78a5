/// Error types for script operations.
///
/// Covers push-data decoding, address validation, and memo encoding.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Address string failed Base58 decoding.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid address length after Base58Check decoding.
    #[error("invalid address length for '{0}'")]
    InvalidAddressLength(String),

    /// Address prefix does not belong to the expected network.
    #[error("address '{address}' has prefix {prefix}, expected {expected}")]
    WrongNetwork {
        address: String,
        prefix: String,
        expected: String,
    },

    /// Address prefix is not a known transparent P2PKH prefix.
    #[error("address not supported {0}")]
    UnsupportedAddress(String),

    /// Base58Check checksum does not match.
    #[error("checksum failed for '{0}'")]
    EncodingChecksumFailed(String),

    /// Memo does not fit in a data-carrier output.
    #[error("memo is {len} bytes, at most {max} allowed")]
    MemoTooLong { len: usize, max: usize },

    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Script is not a P2PKH script.
    #[error("not a P2PKH")]
    NotP2PKH,

    /// Script is not a single-push data-carrier script.
    #[error("not a data-carrier script")]
    NotDataCarrier,

    /// Not enough data in script to complete a push operation.
    #[error("not enough data")]
    DataTooSmall,

    /// Push data exceeds maximum allowed size.
    #[error("data too big")]
    DataTooBig,

    /// Error from primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] zt_primitives::PrimitivesError),
}
