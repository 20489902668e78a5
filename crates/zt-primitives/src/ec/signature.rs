//! ECDSA signature with DER serialization and RFC6979 deterministic nonces.
//!
//! Signatures are always low-S normalized before encoding, as transparent
//! consensus rules reject high-S values.

use k256::ecdsa;
use k256::ecdsa::signature::hazmat::PrehashVerifier;

use crate::ec::private_key::PrivateKey;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// A secp256k1 ECDSA signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    inner: ecdsa::Signature,
}

impl Signature {
    /// Whether S lies in the lower half of the curve order.
    pub fn is_low_s(&self) -> bool {
        self.inner.normalize_s().is_none()
    }

    /// Parse a strict DER signature (no sighash-type suffix).
    ///
    /// R and S must be non-zero and below the curve order. A high S is
    /// accepted here and normalized on re-encoding.
    pub fn from_der(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let inner = ecdsa::Signature::from_der(bytes)
            .map_err(|e| PrimitivesError::InvalidSignature(format!("malformed DER: {}", e)))?;
        Ok(Signature { inner })
    }

    /// DER encoding of the low-S form: `0x30 len 0x02 rlen r 0x02 slen s`.
    pub fn to_der(&self) -> Vec<u8> {
        let low = self.inner.normalize_s().unwrap_or(self.inner);
        low.to_der().as_bytes().to_vec()
    }

    /// Sign a 32-byte digest with an RFC6979 nonce; the result is low-S.
    pub fn sign(digest: &[u8; 32], priv_key: &PrivateKey) -> Result<Self, PrimitivesError> {
        let (sig, _recovery_id) = priv_key
            .signing_key()
            .sign_prehash_recoverable(digest)
            .map_err(|e| PrimitivesError::InvalidSignature(e.to_string()))?;
        Ok(Signature {
            inner: sig.normalize_s().unwrap_or(sig),
        })
    }

    /// Verify against a 32-byte digest. High-S signatures never verify.
    pub fn verify(&self, digest: &[u8; 32], pub_key: &PublicKey) -> bool {
        pub_key
            .verifying_key()
            .verify_prehash(digest, &self.inner)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256;

    /// RFC6979 vector shared across secp256k1 libraries: key = 1,
    /// message = sha256("Satoshi Nakamoto").
    #[test]
    fn test_rfc6979_known_vector() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let key = PrivateKey::from_bytes(&one).unwrap();
        let sig = key.sign(&sha256(b"Satoshi Nakamoto")).unwrap();
        assert_eq!(
            hex::encode(sig.to_der()),
            "3045022100934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8\
             02202442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5"
        );
    }

    #[test]
    fn test_sign_transaction_digest() {
        let key = PrivateKey::from_hex(
            "8ae9c0c958937eeec71e034650e889085c10e91ae1ab94a26c26182f9516a37f",
        )
        .unwrap();
        let mut digest = [0u8; 32];
        digest.copy_from_slice(
            &hex::decode("9c9e4a9c532e5de1410f9b18e8fa150c67f8b8b6f5b78d1a73b3725ff4f0b2b8")
                .unwrap(),
        );
        let sig = key.sign(&digest).unwrap();
        assert_eq!(
            hex::encode(sig.to_der()),
            "3044022071c3e380cf225b6bacea8344a55cb53f5a90d6cd271b85341c88646a7b48c778\
             02203fdcf925c85e783ed38996e3b0f578500da8c6870170e6a7fd0ca345c1f33e4c"
        );
        assert!(key.pub_key().verify(&digest, &sig));
    }

    #[test]
    fn test_sign_is_low_s_and_verifies() {
        let key = PrivateKey::random();
        for i in 0u8..16 {
            let digest = sha256(&[i]);
            let sig = key.sign(&digest).unwrap();
            assert!(sig.is_low_s());
            assert!(key.pub_key().verify(&digest, &sig));
            assert!(!key.pub_key().verify(&sha256(&[i, i]), &sig));
        }
    }

    #[test]
    fn test_to_der_normalizes_high_s() {
        let key = PrivateKey::random();
        let digest = sha256(b"high s");
        let sig = key.sign(&digest).unwrap();
        let (r, s) = sig.inner.split_scalars();
        let high = Signature {
            inner: ecdsa::Signature::from_scalars(r.to_bytes(), (-*s).to_bytes()).unwrap(),
        };
        assert!(!high.is_low_s());
        assert!(!key.pub_key().verify(&digest, &high));
        assert_eq!(high.to_der(), sig.to_der());
    }

    #[test]
    fn test_der_round_trip() {
        let der = hex::decode(
            "3045022100e991791756548996f7c7b038c788fe256a5f578c6e2b3d17269b43647002cf47\
             02202de94b635bfa8bb3dcb1cecbba6c6a4d57cdcb1e9a7c58fe93172ed12599857b",
        )
        .unwrap();
        let sig = Signature::from_der(&der).unwrap();
        assert_eq!(sig.to_der(), der);
    }

    #[test]
    fn test_der_parsing_rejects_malformed() {
        let valid = hex::decode(
            "3044022062d256bf9be90b3ac0a12552254300f50852588e66dcc12b8973ae5129df20af\
             02200b03895eb013dda6de9bd95e681b26b3e61416e31befbc08769e0767484e2f81",
        )
        .unwrap();
        assert!(Signature::from_der(&valid).is_ok());
        assert!(Signature::from_der(&[]).is_err());

        let mut bad_magic = valid.clone();
        bad_magic[0] = 0x31;
        assert!(Signature::from_der(&bad_magic).is_err());

        let mut bad_marker = valid.clone();
        bad_marker[2] = 0x03;
        assert!(Signature::from_der(&bad_marker).is_err());

        let mut trailing = valid.clone();
        trailing.push(0x01);
        assert!(Signature::from_der(&trailing).is_err());

        let truncated = &valid[..valid.len() - 1];
        assert!(Signature::from_der(truncated).is_err());
    }

    #[test]
    fn test_der_rejects_zero_r() {
        let der = hex::decode("3006020100020101").unwrap();
        assert!(Signature::from_der(&der).is_err());
    }
}
