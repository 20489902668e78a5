//! Transaction input referencing a previous output.
//!
//! Holds the outpoint, the unlocking script once signed, and the spent
//! output itself, which the ZIP-244 digests commit to.

use zt_primitives::chainhash::Hash;
use zt_primitives::util::{ByteReader, ByteWriter};
use zt_script::Script;

use crate::output::{write_digest_amount, TransactionOutput};
use crate::TransactionError;

/// Sequence number written for every input; relative lock-time is unused.
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// A single transparent input.
///
/// # Wire format
///
/// | Field            | Size          |
/// |------------------|---------------|
/// | prevout_txid     | 32 bytes      |
/// | prevout_index    | 4 bytes (LE)  |
/// | script length    | VarInt        |
/// | unlocking_script | variable      |
/// | sequence         | 4 bytes (LE)  |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    /// Id of the transaction being spent, in wire order.
    pub prevout_txid: Hash,
    /// Index of the output within that transaction.
    pub prevout_index: u32,
    /// Sequence number. Always `0xFFFFFFFF` for transactions built here.
    pub sequence: u32,
    /// `None` until the input is signed.
    pub unlocking_script: Option<Script>,
    /// The output being spent. Required for digest computation, never
    /// serialized.
    pub source_output: Option<TransactionOutput>,
}

impl TransactionInput {
    /// Create an unsigned input spending `prevout_txid:prevout_index`.
    pub fn new(prevout_txid: Hash, prevout_index: u32, source_output: TransactionOutput) -> Self {
        TransactionInput {
            prevout_txid,
            prevout_index,
            sequence: DEFAULT_SEQUENCE_NUMBER,
            unlocking_script: None,
            source_output: Some(source_output),
        }
    }

    /// Deserialize an input from a `ByteReader`.
    ///
    /// The parsed input has no `source_output`; callers attach it before
    /// computing digests.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let txid: [u8; 32] = reader.read_array().map_err(|e| {
            TransactionError::SerializationError(format!("reading prevout txid: {}", e))
        })?;

        let prevout_index = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading prevout index: {}", e))
        })?;

        let script_bytes = reader.read_var_bytes().map_err(|e| {
            TransactionError::SerializationError(format!("reading unlocking script: {}", e))
        })?;

        let sequence = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading sequence: {}", e))
        })?;

        let unlocking_script = if script_bytes.is_empty() {
            None
        } else {
            Some(Script::from_bytes(script_bytes))
        };

        Ok(TransactionInput {
            prevout_txid: Hash::new(txid),
            prevout_index,
            sequence,
            unlocking_script,
            source_output: None,
        })
    }

    /// Serialize this input in wire format.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        self.write_prevout(writer);
        match &self.unlocking_script {
            Some(script) => writer.write_var_bytes(script.to_bytes()),
            None => writer.write_var_bytes(&[]),
        }
        writer.write_u32_le(self.sequence);
    }

    /// Write the 36-byte outpoint: txid followed by the LE output index.
    pub fn write_prevout(&self, writer: &mut ByteWriter) {
        writer.write_bytes(self.prevout_txid.as_bytes());
        writer.write_u32_le(self.prevout_index);
    }

    /// Write the preimage of this input's `TxIn` digest:
    /// outpoint, spent amount, spent script, sequence.
    pub fn write_for_digest(&self, writer: &mut ByteWriter) -> Result<(), TransactionError> {
        let source = self.source()?;
        self.write_prevout(writer);
        write_digest_amount(writer, source.value)?;
        writer.write_var_bytes(source.locking_script.to_bytes());
        writer.write_u32_le(self.sequence);
        Ok(())
    }

    /// The output being spent, or an error if it was never attached.
    pub fn source(&self) -> Result<&TransactionOutput, TransactionError> {
        self.source_output.as_ref().ok_or_else(|| {
            TransactionError::InvalidTransaction(format!(
                "input {}:{} has no source output",
                self.prevout_txid, self.prevout_index
            ))
        })
    }
}
