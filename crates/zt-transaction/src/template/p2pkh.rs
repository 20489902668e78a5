//! Pay-to-Public-Key-Hash (P2PKH) unlocking template.
//!
//! Produces unlocking scripts of the form `<DER_sig ‖ SIGHASH_ALL>
//! <compressed_pubkey>`.

use zt_primitives::ec::{PrivateKey, PublicKey};
use zt_script::Script;

use crate::sighash::{TxDigests, SIGHASH_ALL};
use crate::template::UnlockingScriptTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Create a P2PKH unlocker signing with `private_key`.
pub fn unlock(private_key: PrivateKey) -> P2PKH {
    let public_key = private_key.pub_key();
    P2PKH {
        private_key,
        public_key,
    }
}

/// P2PKH signing template holding a private key.
pub struct P2PKH {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl P2PKH {
    /// The public key whose hash the spent outputs must commit to.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl UnlockingScriptTemplate for P2PKH {
    /// Sign the specified input and produce the unlocking script.
    ///
    /// The spent output must be a P2PKH script locked to this key. Each
    /// signature is verified against the digest before it is returned.
    fn sign(
        &self,
        tx: &Transaction,
        digests: &TxDigests,
        input_index: usize,
    ) -> Result<Script, TransactionError> {
        let input = tx.inputs.get(input_index).ok_or_else(|| {
            TransactionError::SigningError(format!(
                "input index {} out of range (tx has {} inputs)",
                input_index,
                tx.inputs.len()
            ))
        })?;

        let source = input
            .source()
            .map_err(|e| TransactionError::SigningError(e.to_string()))?;
        let pkh = source.locking_script.public_key_hash().map_err(|_| {
            TransactionError::SigningError(format!(
                "input {} does not spend a P2PKH output",
                input_index
            ))
        })?;
        if pkh != self.public_key.hash160() {
            return Err(TransactionError::SigningError(format!(
                "input {} is locked to {}, not to the signing key",
                input_index,
                hex::encode(pkh)
            )));
        }

        let sig_hash = digests.signature_digest(tx, input_index)?;
        let signature = self.private_key.sign(&sig_hash)?;
        if !self.public_key.verify(&sig_hash, &signature) {
            return Err(TransactionError::SigningError(format!(
                "signature for input {} failed verification",
                input_index
            )));
        }

        let der_sig = signature.to_der();
        let mut sig_buf = Vec::with_capacity(der_sig.len() + 1);
        sig_buf.extend_from_slice(&der_sig);
        sig_buf.push(SIGHASH_ALL);

        let mut script = Script::new();
        script.append_push_data(&sig_buf)?;
        script.append_push_data(&self.public_key.to_compressed())?;

        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TransactionInput;
    use crate::output::TransactionOutput;
    use crate::sighash::ShieldedDigests;
    use zt_primitives::chainhash::Hash;
    use zt_script::Network;

    const SK: &str = "8ae9c0c958937eeec71e034650e889085c10e91ae1ab94a26c26182f9516a37f";
    const FROM_SCRIPT: &str = "76a914936667ff8d2d41361a4df4a370b309fb15380eac88ac";
    const OTHER_SCRIPT: &str = "76a9144fb7f7b9ea3859086b151cde4d3c75152e51547288ac";

    fn tx_spending(script_hex: &str) -> Transaction {
        let mut tx = Transaction::new(Network::Testnet, 10);
        tx.inputs.push(TransactionInput::new(
            Hash::new([7; 32]),
            1,
            TransactionOutput::new(50_000, Script::from_hex(script_hex).unwrap()),
        ));
        tx.outputs.push(TransactionOutput::new(
            30_000,
            Script::from_hex(OTHER_SCRIPT).unwrap(),
        ));
        tx
    }

    fn signer() -> P2PKH {
        unlock(PrivateKey::from_hex(SK).unwrap())
    }

    #[test]
    fn test_sign_produces_sig_and_pubkey_pushes() {
        let tx = tx_spending(FROM_SCRIPT);
        let digests = TxDigests::new(&tx, &ShieldedDigests::default()).unwrap();
        let script = signer().sign(&tx, &digests, 0).unwrap();

        let chunks = script.chunks().unwrap();
        assert_eq!(chunks.len(), 2);
        let sig = chunks[0].data.as_ref().unwrap();
        assert_eq!(*sig.last().unwrap(), SIGHASH_ALL);
        let pk = chunks[1].data.as_ref().unwrap();
        assert_eq!(
            hex::encode(pk),
            "03243597856d5bd7c8f91f77446a53db425ce10d237c1d6928f2268acdc538797e"
        );

        let parsed = zt_primitives::ec::Signature::from_der(&sig[..sig.len() - 1]).unwrap();
        assert!(parsed.is_low_s());
        let digest = digests.signature_digest(&tx, 0).unwrap();
        assert!(signer().public_key().verify(&digest, &parsed));
    }

    #[test]
    fn test_sign_rejects_foreign_input() {
        let tx = tx_spending(OTHER_SCRIPT);
        let digests = TxDigests::new(&tx, &ShieldedDigests::default()).unwrap();
        assert!(matches!(
            signer().sign(&tx, &digests, 0),
            Err(TransactionError::SigningError(_))
        ));
    }

    #[test]
    fn test_sign_rejects_non_p2pkh_input() {
        let tx = tx_spending("6a044d454d4f");
        let digests = TxDigests::new(&tx, &ShieldedDigests::default()).unwrap();
        assert!(matches!(
            signer().sign(&tx, &digests, 0),
            Err(TransactionError::SigningError(_))
        ));
    }

    #[test]
    fn test_sign_index_out_of_range() {
        let tx = tx_spending(FROM_SCRIPT);
        let digests = TxDigests::new(&tx, &ShieldedDigests::default()).unwrap();
        assert!(signer().sign(&tx, &digests, 1).is_err());
    }
}
