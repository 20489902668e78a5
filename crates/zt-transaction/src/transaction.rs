//! The v5 transparent-only transaction.
//!
//! Serializes and parses the NU5 (ZIP-225) layout restricted to
//! transparent inputs and outputs: the Sapling and Orchard sections are
//! always present and always empty.

use zt_primitives::chainhash::Hash;
use zt_primitives::util::{ByteReader, ByteWriter, VarInt};
use zt_script::Network;

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::sighash::{self, ShieldedDigests};
use crate::TransactionError;

/// Transaction format version.
pub const TX_VERSION: u32 = 5;

/// The fOverwintered flag, set on every post-Overwinter transaction.
pub const OVERWINTERED_FLAG: u32 = 1 << 31;

/// Version group id of v5 transactions.
pub const VERSION_GROUP_ID: u32 = 0x26A7_270A;

/// Length of the fixed header: version, group id, branch id, lock time,
/// expiry height.
pub const HEADER_LEN: usize = 20;

/// A v5 transparent transaction.
///
/// # Wire format
///
/// | Field                 | Size                 |
/// |-----------------------|----------------------|
/// | header                | 4 bytes (LE)         |
/// | version_group_id      | 4 bytes (LE)         |
/// | consensus_branch_id   | 4 bytes (LE)         |
/// | lock_time             | 4 bytes (LE)         |
/// | expiry_height         | 4 bytes (LE)         |
/// | input count           | VarInt               |
/// | inputs                | variable (per input) |
/// | output count          | VarInt               |
/// | outputs               | variable             |
/// | sapling spends        | VarInt (0)           |
/// | sapling outputs       | VarInt (0)           |
/// | orchard actions       | VarInt (0)           |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Consensus branch id the transaction is bound to.
    pub consensus_branch_id: u32,

    /// Lock time. Always 0 for transactions built here.
    pub lock_time: u32,

    /// Block height after which the transaction expires.
    pub expiry_height: u32,

    /// Ordered list of transparent inputs.
    pub inputs: Vec<TransactionInput>,

    /// Ordered list of transparent outputs.
    pub outputs: Vec<TransactionOutput>,
}

impl Transaction {
    /// Create an empty transaction for `network` expiring at `expiry_height`.
    pub fn new(network: Network, expiry_height: u32) -> Self {
        Transaction {
            consensus_branch_id: network.consensus_branch_id(),
            lock_time: 0,
            expiry_height,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a transaction from a hex-encoded string.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| {
            TransactionError::SerializationError(format!("invalid hex: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction from raw bytes.
    ///
    /// The slice must hold exactly one transaction with no trailing data.
    /// Parsed inputs carry no source outputs; attach them with
    /// [`Transaction::attach_source_outputs`] before computing signature
    /// digests.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = ByteReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::SerializationError(format!(
                "trailing {} bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(tx)
    }

    /// Deserialize a transaction from a `ByteReader`.
    ///
    /// Rejects any version other than overwintered v5 and any non-empty
    /// shielded section.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let header = read_u32(reader, "header")?;
        if header != OVERWINTERED_FLAG | TX_VERSION {
            return Err(TransactionError::SerializationError(format!(
                "unsupported transaction header {:#010x}",
                header
            )));
        }

        let group_id = read_u32(reader, "version group id")?;
        if group_id != VERSION_GROUP_ID {
            return Err(TransactionError::SerializationError(format!(
                "unsupported version group id {:#010x}",
                group_id
            )));
        }

        let consensus_branch_id = read_u32(reader, "consensus branch id")?;
        let lock_time = read_u32(reader, "lock time")?;
        let expiry_height = read_u32(reader, "expiry height")?;

        let input_count = read_count(reader, "input count")?;
        let mut inputs = Vec::with_capacity(input_count.min(reader.remaining()));
        for _ in 0..input_count {
            inputs.push(TransactionInput::read_from(reader)?);
        }

        let output_count = read_count(reader, "output count")?;
        let mut outputs = Vec::with_capacity(output_count.min(reader.remaining()));
        for _ in 0..output_count {
            outputs.push(TransactionOutput::read_from(reader)?);
        }

        for section in ["sapling spend count", "sapling output count", "orchard action count"] {
            if read_count(reader, section)? != 0 {
                return Err(TransactionError::SerializationError(format!(
                    "non-empty {}: shielded components are not supported",
                    section
                )));
            }
        }

        Ok(Transaction {
            consensus_branch_id,
            lock_time,
            expiry_height,
            inputs,
            outputs,
        })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Write the 20-byte header shared by the wire format and the header
    /// digest.
    pub fn write_header(&self, writer: &mut ByteWriter) {
        writer.write_u32_le(OVERWINTERED_FLAG | TX_VERSION);
        writer.write_u32_le(VERSION_GROUP_ID);
        writer.write_u32_le(self.consensus_branch_id);
        writer.write_u32_le(self.lock_time);
        writer.write_u32_le(self.expiry_height);
    }

    /// Serialize this transaction to raw bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(512);
        self.write_header(&mut writer);

        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(&mut writer);
        }

        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(&mut writer);
        }

        // sapling spends, sapling outputs, orchard actions
        writer.write_zeros(3);
        writer.into_bytes()
    }

    /// Serialize this transaction to a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    // -----------------------------------------------------------------
    // Transaction ID
    // -----------------------------------------------------------------

    /// Compute the ZIP-244 transaction id.
    ///
    /// Unlike the signature digest, the txid does not commit to spent
    /// amounts or scripts, so it is available on parsed transactions.
    pub fn tx_id(&self) -> Result<Hash, TransactionError> {
        sighash::txid(self, &ShieldedDigests::default())
    }

    /// The transaction id as byte-reversed hex.
    pub fn tx_id_hex(&self) -> Result<String, TransactionError> {
        Ok(self.tx_id()?.to_string())
    }

    // -----------------------------------------------------------------
    // Values
    // -----------------------------------------------------------------

    /// Attach the spent outputs to the inputs, in input order.
    pub fn attach_source_outputs(
        &mut self,
        sources: Vec<TransactionOutput>,
    ) -> Result<(), TransactionError> {
        if sources.len() != self.inputs.len() {
            return Err(TransactionError::InvalidTransaction(format!(
                "{} source outputs for {} inputs",
                sources.len(),
                self.inputs.len()
            )));
        }
        for (input, source) in self.inputs.iter_mut().zip(sources) {
            input.source_output = Some(source);
        }
        Ok(())
    }

    /// Sum of output values.
    pub fn total_output_value(&self) -> u64 {
        self.outputs.iter().map(|o| o.value).sum()
    }

    /// Sum of spent values. Fails if any input lacks its source output.
    pub fn total_input_value(&self) -> Result<u64, TransactionError> {
        self.inputs
            .iter()
            .map(|i| i.source().map(|s| s.value))
            .sum()
    }
}

impl std::fmt::Display for Transaction {
    /// Display the transaction as its hex-encoded serialization.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn read_u32(reader: &mut ByteReader, field: &str) -> Result<u32, TransactionError> {
    reader.read_u32_le().map_err(|e| {
        TransactionError::SerializationError(format!("reading {}: {}", field, e))
    })
}

fn read_count(reader: &mut ByteReader, field: &str) -> Result<usize, TransactionError> {
    let count = reader.read_varint().map_err(|e| {
        TransactionError::SerializationError(format!("reading {}: {}", field, e))
    })?;
    usize::try_from(count.value()).map_err(|_| {
        TransactionError::SerializationError(format!("{} {} out of range", field, count.value()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let tx = Transaction::new(Network::Testnet, 200);
        let mut w = ByteWriter::new();
        tx.write_header(&mut w);
        assert_eq!(w.len(), HEADER_LEN);
        assert_eq!(
            hex::encode(w.as_bytes()),
            "050000800a27a7265510e7c800000000c8000000"
        );
    }

    #[test]
    fn test_empty_transaction_round_trip() {
        let tx = Transaction::new(Network::Mainnet, 7);
        let bytes = tx.to_bytes();
        assert_eq!(bytes.len(), HEADER_LEN + 2 + 3);
        assert_eq!(Transaction::from_bytes(&bytes).unwrap(), tx);
    }

    #[test]
    fn test_from_bytes_rejects_trailing_data() {
        let mut bytes = Transaction::new(Network::Testnet, 1).to_bytes();
        bytes.push(0);
        assert!(matches!(
            Transaction::from_bytes(&bytes),
            Err(TransactionError::SerializationError(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_shielded_sections() {
        let mut bytes = Transaction::new(Network::Testnet, 1).to_bytes();
        let last = bytes.len() - 1;
        bytes[last] = 1;
        assert!(Transaction::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_from_bytes_rejects_other_versions() {
        let mut bytes = Transaction::new(Network::Testnet, 1).to_bytes();
        bytes[0] = 0x04;
        assert!(Transaction::from_bytes(&bytes).is_err());

        let mut bytes = Transaction::new(Network::Testnet, 1).to_bytes();
        bytes[4] = 0x00;
        assert!(Transaction::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Transaction::from_hex("zz").is_err());
        assert!(Transaction::from_hex("0500").is_err());
    }

    #[test]
    fn test_attach_source_outputs_count_mismatch() {
        let mut tx = Transaction::new(Network::Testnet, 1);
        assert!(tx.attach_source_outputs(vec![TransactionOutput::default()]).is_err());
    }
}
