/// Errors raised by key handling, encodings and the byte codecs.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    // keys and signatures
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("invalid WIF: {0}")]
    InvalidWif(String),

    // text encodings
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    #[error("invalid base58: {0}")]
    InvalidBase58(String),
    #[error("base58check checksum mismatch")]
    ChecksumMismatch,
    #[error("invalid hash: {0}")]
    InvalidHash(String),

    // byte codecs
    /// A fixed-width field was asked to hold a wider value.
    #[error("value {value} does not fit in {width} bytes")]
    ValueOverflow { value: u64, width: usize },
    #[error("unexpected end of data")]
    UnexpectedEof,
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
