//! Hash function primitives.
//!
//! SHA-256, RIPEMD-160 and Hash160 for keys and addresses, plus the
//! personalized BLAKE2b-256 used by every transaction digest.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Length of a BLAKE2b personalization tag in bytes.
pub const PERSONALIZATION_LEN: usize = 16;

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// RIPEMD-160(SHA-256(data)), the key hash inside a P2PKH address.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// BLAKE2b with a 32-byte output under a 16-byte personalization tag.
pub fn blake2b_256(personal: &[u8; PERSONALIZATION_LEN], data: &[u8]) -> [u8; 32] {
    let hash = blake2b_simd::Params::new()
        .hash_length(32)
        .personal(personal)
        .hash(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(hash.as_bytes());
    out
}
