//! ZIP-244 transaction digests.
//!
//! Every digest is a BLAKE2b-256 hash under a 16-byte personalization.
//! Five transparent digests and the header digest are shared by all
//! inputs and computed once per transaction; only the `TxIn` digest and
//! the two combine steps are computed per input.
//!
//! See <https://zips.z.cash/zip-0244>

use zt_primitives::chainhash::Hash;
use zt_primitives::hash::{blake2b_256, PERSONALIZATION_LEN};
use zt_primitives::util::ByteWriter;

use crate::input::TransactionInput;
use crate::transaction::{Transaction, HEADER_LEN};
use crate::TransactionError;

// -----------------------------------------------------------------------
// Personalizations
// -----------------------------------------------------------------------

pub const HEADERS_PERSONALIZATION: &[u8; 16] = b"ZTxIdHeadersHash";
pub const PREVOUTS_PERSONALIZATION: &[u8; 16] = b"ZTxIdPrevoutHash";
pub const SEQUENCE_PERSONALIZATION: &[u8; 16] = b"ZTxIdSequencHash";
pub const OUTPUTS_PERSONALIZATION: &[u8; 16] = b"ZTxIdOutputsHash";
pub const AMOUNTS_PERSONALIZATION: &[u8; 16] = b"ZTxTrAmountsHash";
pub const SCRIPTS_PERSONALIZATION: &[u8; 16] = b"ZTxTrScriptsHash";
pub const TXIN_PERSONALIZATION: &[u8; 16] = b"Zcash___TxInHash";
pub const TRANSPARENT_PERSONALIZATION: &[u8; 16] = b"ZTxIdTranspaHash";

/// Prefix of the final personalization; the branch id fills the last 4 bytes.
pub const TX_HASH_PREFIX: &[u8; 12] = b"ZcashTxHash_";

/// Sign all inputs and all outputs; the only hash type produced here.
pub const SIGHASH_ALL: u8 = 0x01;

/// Length of the transparent signature preimage: hash type plus six digests.
pub const TRANSPARENT_SIG_PREIMAGE_LEN: usize = 1 + 6 * 32;

// -----------------------------------------------------------------------
// Shielded placeholders
// -----------------------------------------------------------------------

/// Sapling digest of a transaction with no Sapling components.
pub const EMPTY_SAPLING_DIGEST: [u8; 32] = [
    0x6f, 0x2f, 0xc8, 0xf9, 0x8f, 0xea, 0xfd, 0x94, 0xe7, 0x4a, 0x0d, 0xf4, 0xbe, 0xd7, 0x43, 0x91,
    0xee, 0x0b, 0x5a, 0x69, 0x94, 0x5e, 0x4c, 0xed, 0x8c, 0xa8, 0xa0, 0x95, 0x20, 0x6f, 0x00, 0xae,
];

/// Orchard digest of a transaction with no Orchard actions.
pub const EMPTY_ORCHARD_DIGEST: [u8; 32] = [
    0x9f, 0xbe, 0x4e, 0xd1, 0x3b, 0x0c, 0x08, 0xe6, 0x71, 0xc1, 0x1a, 0x34, 0x07, 0xd8, 0x4e, 0x11,
    0x17, 0xcd, 0x45, 0x02, 0x8a, 0x2e, 0xee, 0x1b, 0x9f, 0xea, 0xe7, 0x8b, 0x48, 0xa6, 0xe2, 0xc1,
];

/// The Sapling and Orchard digests mixed into the final hashes.
///
/// Defaults to the empty-bundle digests, which is correct for every
/// transaction this crate builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShieldedDigests {
    pub sapling: [u8; 32],
    pub orchard: [u8; 32],
}

impl Default for ShieldedDigests {
    fn default() -> Self {
        ShieldedDigests {
            sapling: EMPTY_SAPLING_DIGEST,
            orchard: EMPTY_ORCHARD_DIGEST,
        }
    }
}

// -----------------------------------------------------------------------
// Shared digests
// -----------------------------------------------------------------------

/// The per-transaction digests, computed once and reused for every input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxDigests {
    pub header: [u8; 32],
    pub prevouts: [u8; 32],
    pub sequence: [u8; 32],
    pub outputs: [u8; 32],
    pub amounts: [u8; 32],
    pub scripts: [u8; 32],
    pub shielded: ShieldedDigests,
    consensus_branch_id: u32,
}

impl TxDigests {
    /// Compute the shared digests of `tx`.
    ///
    /// Every input must carry its source output. Fails with
    /// `AmountTooLarge` if a spent or created amount exceeds 48 bits.
    pub fn new(tx: &Transaction, shielded: &ShieldedDigests) -> Result<Self, TransactionError> {
        let digests = TxDigests {
            header: header_digest(tx),
            prevouts: prevouts_digest(tx),
            sequence: sequence_digest(tx),
            outputs: outputs_digest(tx)?,
            amounts: amounts_digest(tx)?,
            scripts: scripts_digest(tx)?,
            shielded: *shielded,
            consensus_branch_id: tx.consensus_branch_id,
        };

        tracing::debug!(
            header = %hex::encode(digests.header),
            prevouts = %hex::encode(digests.prevouts),
            sequence = %hex::encode(digests.sequence),
            outputs = %hex::encode(digests.outputs),
            amounts = %hex::encode(digests.amounts),
            scripts = %hex::encode(digests.scripts),
            "computed shared transaction digests"
        );
        Ok(digests)
    }

    /// The ZIP-244 transparent digest committed to when signing `txin`.
    ///
    /// Preimage: `SIGHASH_ALL ‖ prevouts ‖ amounts ‖ scripts ‖ sequence ‖
    /// outputs ‖ txin`, 193 bytes.
    pub fn transparent_sig_digest(&self, txin: &[u8; 32]) -> [u8; 32] {
        let mut w = ByteWriter::with_capacity(TRANSPARENT_SIG_PREIMAGE_LEN);
        w.write_u8(SIGHASH_ALL);
        w.write_bytes(&self.prevouts);
        w.write_bytes(&self.amounts);
        w.write_bytes(&self.scripts);
        w.write_bytes(&self.sequence);
        w.write_bytes(&self.outputs);
        w.write_bytes(txin);
        blake2b_256(TRANSPARENT_PERSONALIZATION, w.as_bytes())
    }

    /// Compute the signature digest for input `input_index` of `tx`.
    ///
    /// `tx` must be the transaction these digests were computed from.
    pub fn signature_digest(
        &self,
        tx: &Transaction,
        input_index: usize,
    ) -> Result<[u8; 32], TransactionError> {
        let input = tx.inputs.get(input_index).ok_or_else(|| {
            TransactionError::InvalidTransaction(format!(
                "input index {} out of range (tx has {} inputs)",
                input_index,
                tx.inputs.len()
            ))
        })?;

        let txin = txin_digest(input)?;
        let transparent = self.transparent_sig_digest(&txin);
        let sighash = self.combine(&transparent);

        tracing::debug!(
            input = input_index,
            txin = %hex::encode(txin),
            transparent = %hex::encode(transparent),
            sighash = %hex::encode(sighash),
            "computed input signature digest"
        );
        Ok(sighash)
    }

    /// The transaction id implied by these digests.
    pub fn txid(&self) -> Hash {
        let transparent = txid_transparent_digest(&self.prevouts, &self.sequence, &self.outputs);
        Hash::new(self.combine(&transparent))
    }

    /// Final hash over header, transparent and shielded digests, 128 bytes
    /// of preimage.
    fn combine(&self, transparent: &[u8; 32]) -> [u8; 32] {
        combine(
            self.consensus_branch_id,
            &self.header,
            transparent,
            &self.shielded,
        )
    }
}

// -----------------------------------------------------------------------
// Individual digests
// -----------------------------------------------------------------------

/// Digest of the 20-byte header.
pub fn header_digest(tx: &Transaction) -> [u8; 32] {
    let mut w = ByteWriter::with_capacity(HEADER_LEN);
    tx.write_header(&mut w);
    blake2b_256(HEADERS_PERSONALIZATION, w.as_bytes())
}

/// Digest of every input's outpoint, in input order.
pub fn prevouts_digest(tx: &Transaction) -> [u8; 32] {
    let mut w = ByteWriter::with_capacity(36 * tx.inputs.len());
    for input in &tx.inputs {
        input.write_prevout(&mut w);
    }
    blake2b_256(PREVOUTS_PERSONALIZATION, w.as_bytes())
}

/// Digest of every input's sequence number.
pub fn sequence_digest(tx: &Transaction) -> [u8; 32] {
    let mut w = ByteWriter::with_capacity(4 * tx.inputs.len());
    for input in &tx.inputs {
        w.write_u32_le(input.sequence);
    }
    blake2b_256(SEQUENCE_PERSONALIZATION, w.as_bytes())
}

/// Digest of every output: 48-bit amount in 8 bytes plus the
/// length-prefixed locking script.
pub fn outputs_digest(tx: &Transaction) -> Result<[u8; 32], TransactionError> {
    let mut w = ByteWriter::new();
    for output in &tx.outputs {
        output.write_for_digest(&mut w)?;
    }
    Ok(blake2b_256(OUTPUTS_PERSONALIZATION, w.as_bytes()))
}

/// Digest of every spent amount, in input order.
pub fn amounts_digest(tx: &Transaction) -> Result<[u8; 32], TransactionError> {
    let mut w = ByteWriter::with_capacity(8 * tx.inputs.len());
    for input in &tx.inputs {
        crate::output::write_digest_amount(&mut w, input.source()?.value)?;
    }
    Ok(blake2b_256(AMOUNTS_PERSONALIZATION, w.as_bytes()))
}

/// Digest of every spent locking script, length-prefixed, in input order.
pub fn scripts_digest(tx: &Transaction) -> Result<[u8; 32], TransactionError> {
    let mut w = ByteWriter::new();
    for input in &tx.inputs {
        w.write_var_bytes(input.source()?.locking_script.to_bytes());
    }
    Ok(blake2b_256(SCRIPTS_PERSONALIZATION, w.as_bytes()))
}

/// Digest of the single input being signed.
pub fn txin_digest(input: &TransactionInput) -> Result<[u8; 32], TransactionError> {
    let mut w = ByteWriter::new();
    input.write_for_digest(&mut w)?;
    Ok(blake2b_256(TXIN_PERSONALIZATION, w.as_bytes()))
}

/// Compute the ZIP-244 transaction id of `tx`.
///
/// Needs no source outputs: the txid commits to outpoints, sequences and
/// outputs only.
pub fn txid(tx: &Transaction, shielded: &ShieldedDigests) -> Result<Hash, TransactionError> {
    let transparent = txid_transparent_digest(
        &prevouts_digest(tx),
        &sequence_digest(tx),
        &outputs_digest(tx)?,
    );
    Ok(Hash::new(combine(
        tx.consensus_branch_id,
        &header_digest(tx),
        &transparent,
        shielded,
    )))
}

fn txid_transparent_digest(prevouts: &[u8; 32], sequence: &[u8; 32], outputs: &[u8; 32]) -> [u8; 32] {
    let mut w = ByteWriter::with_capacity(96);
    w.write_bytes(prevouts);
    w.write_bytes(sequence);
    w.write_bytes(outputs);
    blake2b_256(TRANSPARENT_PERSONALIZATION, w.as_bytes())
}

/// Personalization of the final hash: `"ZcashTxHash_" ‖ branch_id (LE)`.
pub fn tx_hash_personalization(consensus_branch_id: u32) -> [u8; PERSONALIZATION_LEN] {
    let mut personal = [0u8; PERSONALIZATION_LEN];
    personal[..12].copy_from_slice(TX_HASH_PREFIX);
    personal[12..].copy_from_slice(&consensus_branch_id.to_le_bytes());
    personal
}

fn combine(
    consensus_branch_id: u32,
    header: &[u8; 32],
    transparent: &[u8; 32],
    shielded: &ShieldedDigests,
) -> [u8; 32] {
    let mut w = ByteWriter::with_capacity(128);
    w.write_bytes(header);
    w.write_bytes(transparent);
    w.write_bytes(&shielded.sapling);
    w.write_bytes(&shielded.orchard);
    blake2b_256(&tx_hash_personalization(consensus_branch_id), w.as_bytes())
}
