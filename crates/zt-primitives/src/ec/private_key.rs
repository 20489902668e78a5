//! secp256k1 private key.
//!
//! Wraps the k256 signing key and adds hex and WIF import/export.

use std::fmt;

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::ec::signature::Signature;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// Mainnet WIF prefix byte.
pub const MAINNET_WIF_PREFIX: u8 = 0x80;

/// Testnet WIF prefix byte.
pub const TESTNET_WIF_PREFIX: u8 = 0xef;

/// Compression flag byte appended to WIF for compressed public keys.
const COMPRESS_MAGIC: u8 = 0x01;

/// A secp256k1 private key for signing transaction digests.
///
/// The underlying k256 key zeroizes its scalar on drop.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    pub fn random() -> Self {
        PrivateKey {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// or an error if the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: PRIVATE_KEY_BYTES_LEN,
                got: bytes.len(),
            });
        }
        let signing_key = SigningKey::from_bytes(bytes.into())
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a hexadecimal string.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string representing the 32-byte scalar.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = Zeroizing::new(hex::decode(hex_str)?);
        Self::from_bytes(&bytes)
    }

    /// Create a private key from a WIF (Wallet Import Format) string.
    ///
    /// Decodes the Base58Check string and validates the checksum. Both the
    /// mainnet (0x80) and testnet (0xef) version bytes are accepted; the
    /// version is returned alongside the key so callers can check it
    /// against their network.
    ///
    /// # Arguments
    /// * `wif` - A Base58Check-encoded WIF string (compressed or uncompressed).
    ///
    /// # Returns
    /// `Ok((PrivateKey, version_byte))` on success, or an error if the WIF is
    /// malformed or the checksum fails.
    pub fn from_wif(wif: &str) -> Result<(Self, u8), PrimitivesError> {
        let payload = Zeroizing::new(base58::check_decode(wif).map_err(|e| match e {
            PrimitivesError::ChecksumMismatch => e,
            other => PrimitivesError::InvalidWif(other.to_string()),
        })?);

        // 1 byte version + 32 bytes key, plus 1 byte compress flag when compressed.
        match payload.len() {
            34 if payload[33] != COMPRESS_MAGIC => {
                return Err(PrimitivesError::InvalidWif(
                    "malformed private key: invalid compression flag".to_string(),
                ));
            }
            33 | 34 => {}
            n => {
                return Err(PrimitivesError::InvalidWif(format!(
                    "malformed private key: invalid length {}",
                    n
                )));
            }
        }

        let version = payload[0];
        if version != MAINNET_WIF_PREFIX && version != TESTNET_WIF_PREFIX {
            return Err(PrimitivesError::InvalidWif(format!(
                "unknown version byte 0x{:02x}",
                version
            )));
        }
        let key = Self::from_bytes(&payload[1..1 + PRIVATE_KEY_BYTES_LEN])?;
        Ok((key, version))
    }

    /// Encode the private key as a compressed WIF string.
    ///
    /// # Arguments
    /// * `prefix` - The version byte (0x80 for mainnet, 0xef for testnet).
    pub fn to_wif_prefix(&self, prefix: u8) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(1 + PRIVATE_KEY_BYTES_LEN + 1));
        payload.push(prefix);
        payload.extend_from_slice(self.to_bytes().as_slice());
        payload.push(COMPRESS_MAGIC);
        base58::check_encode(&payload)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        let mut out = Zeroizing::new([0u8; 32]);
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Derive the corresponding public key for this private key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_k256_verifying_key(self.inner.verifying_key())
    }

    /// Sign a 32-byte digest using deterministic RFC6979 nonces.
    ///
    /// The digest is the message; no further hashing is applied. The
    /// result is low-S normalized.
    pub fn sign(&self, digest: &[u8; 32]) -> Result<Signature, PrimitivesError> {
        Signature::sign(digest, self)
    }

    /// Access the underlying k256 `SigningKey`.
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("pub_key", &self.pub_key().to_hex())
            .finish_non_exhaustive()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        *self.to_bytes() == *other.to_bytes()
    }
}

impl Eq for PrivateKey {}

#[cfg(test)]
mod tests {
    use super::*;

    const SK_HEX: &str = "8ae9c0c958937eeec71e034650e889085c10e91ae1ab94a26c26182f9516a37f";
    const SK_WIF_MAINNET: &str = "L1sjrupHTXwtX847jZhXpkACVYE6d4edPeJK9762j7AeCYL4c32z";
    const SK_WIF_TESTNET: &str = "cSEjKpp8tbe9gZXP7yWfC4fG7mXWHWkKTgSnFXYYEDpeTHSLi29x";

    #[test]
    fn test_from_hex_derives_pubkey() {
        let key = PrivateKey::from_hex(SK_HEX).unwrap();
        assert_eq!(
            key.pub_key().to_hex(),
            "03243597856d5bd7c8f91f77446a53db425ce10d237c1d6928f2268acdc538797e"
        );
        assert_eq!(hex::encode(*key.to_bytes()), SK_HEX);
    }

    #[test]
    fn test_wif_vectors() {
        let key = PrivateKey::from_hex(SK_HEX).unwrap();
        assert_eq!(key.to_wif_prefix(MAINNET_WIF_PREFIX), SK_WIF_MAINNET);
        assert_eq!(key.to_wif_prefix(TESTNET_WIF_PREFIX), SK_WIF_TESTNET);

        let (mainnet, version) = PrivateKey::from_wif(SK_WIF_MAINNET).unwrap();
        assert_eq!(version, MAINNET_WIF_PREFIX);
        assert_eq!(mainnet, key);

        let (testnet, version) = PrivateKey::from_wif(SK_WIF_TESTNET).unwrap();
        assert_eq!(version, TESTNET_WIF_PREFIX);
        assert_eq!(testnet, key);
    }

    #[test]
    fn test_wif_round_trip_random_key() {
        let key = PrivateKey::random();
        let (decoded, _) = PrivateKey::from_wif(&key.to_wif_prefix(TESTNET_WIF_PREFIX)).unwrap();
        assert_eq!(decoded, key);
    }

    #[test]
    fn test_from_invalid_hex() {
        assert!(PrivateKey::from_hex("").is_err());
        assert!(PrivateKey::from_hex(SK_WIF_MAINNET).is_err());
        assert!(matches!(
            PrivateKey::from_hex("8ae9c0"),
            Err(PrimitivesError::InvalidKeyLength { expected: 32, got: 3 })
        ));
    }

    #[test]
    fn test_zero_scalar_rejected() {
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_from_invalid_wif() {
        // modified character
        assert!(PrivateKey::from_wif("L1sjrupHTXwtX847jZhXpkACVYE6d4edPeJK9762j7AeCYL4c32Z").is_err());
        // truncated
        assert!(PrivateKey::from_wif("L1sjrupHTXwtX847jZhXpkACVYE6d4edPeJK9762j7AeCYL4c32").is_err());
        // an address is not a key
        assert!(PrivateKey::from_wif("tmP9jLgTnhDdKdWJCm4BT2t6acGnxqP14yU").is_err());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let key = PrivateKey::from_hex(SK_HEX).unwrap();
        let rendered = format!("{:?}", key);
        assert!(!rendered.contains(SK_HEX));
        assert!(rendered.contains("03243597856d5bd7"));
    }
}
