//! Base58 encoding and decoding with optional checksum support.
//!
//! Base58Check (payload followed by the first four bytes of its
//! double-SHA-256) is the text form of transparent addresses and WIF keys.

use crate::PrimitivesError;

/// Encode to Base58 with the Bitcoin alphabet, which Zcash shares.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode a Base58 string.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

/// Encode `data` (version prefix and payload) with its checksum appended.
pub fn check_encode(data: &[u8]) -> String {
    bs58::encode(data).with_check().into_string()
}

/// Decode a Base58Check string and strip the verified checksum.
///
/// # Returns
/// The payload, `ChecksumMismatch` if the checksum is wrong, or
/// `InvalidBase58` for bad characters or a string too short to hold one.
pub fn check_decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s).with_check(None).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidChecksum { .. } => PrimitivesError::ChecksumMismatch,
        other => PrimitivesError::InvalidBase58(other.to_string()),
    })
}
