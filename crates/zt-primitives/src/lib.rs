/// Zcash transparent SDK - Cryptographic primitives, hashing, and utilities.
///
/// This crate provides the foundational building blocks for the transparent
/// transaction builder:
/// - Hash functions (SHA-256, RIPEMD-160, Hash160, personalized BLAKE2b-256)
/// - Chain hash type for transaction identification
/// - Elliptic curve cryptography (secp256k1 keys, low-S DER signatures)
/// - Variable-length integer encoding and length-checked byte writers
/// - Base58 encoding/decoding

pub mod hash;
pub mod chainhash;
pub mod util;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
