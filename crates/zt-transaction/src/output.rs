//! Transaction output with a zatoshi value and locking script.
//!
//! Provides the v5 wire encoding and the narrower amount encoding used by
//! the ZIP-244 digests.

use zt_primitives::util::{ByteReader, ByteWriter, VarInt};
use zt_primitives::PrimitivesError;
use zt_script::Script;

use crate::TransactionError;

/// Byte width of an amount inside digest preimages.
pub const DIGEST_AMOUNT_WIDTH: usize = 6;

/// Largest amount representable in a digest preimage (2^48 - 1).
pub const MAX_DIGEST_AMOUNT: u64 = (1 << 48) - 1;

/// A single transparent output.
///
/// # Wire format
///
/// | Field          | Size         |
/// |----------------|--------------|
/// | value          | 8 bytes (LE) |
/// | script length  | VarInt       |
/// | locking_script | variable     |
///
/// Digest preimages write the value as 6 bytes followed by 2 zero bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionOutput {
    /// Value in zatoshi. Data-carrier outputs carry 0.
    pub value: u64,
    /// The locking script.
    pub locking_script: Script,
}

impl TransactionOutput {
    pub fn new(value: u64, locking_script: Script) -> Self {
        TransactionOutput {
            value,
            locking_script,
        }
    }

    /// Deserialize an output from a `ByteReader`.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let value = reader.read_u64_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading output value: {}", e))
        })?;

        let script_bytes = reader.read_var_bytes().map_err(|e| {
            TransactionError::SerializationError(format!("reading locking script: {}", e))
        })?;

        Ok(TransactionOutput {
            value,
            locking_script: Script::from_bytes(script_bytes),
        })
    }

    /// Serialize this output in wire format (full 8-byte value).
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_u64_le(self.value);
        let script_bytes = self.locking_script.to_bytes();
        writer.write_varint(VarInt::from(script_bytes.len()));
        writer.write_bytes(script_bytes);
    }

    /// Serialize this output for the outputs digest.
    ///
    /// # Returns
    /// `AmountTooLarge` if the value does not fit in 48 bits; nothing is
    /// written in that case.
    pub fn write_for_digest(&self, writer: &mut ByteWriter) -> Result<(), TransactionError> {
        write_digest_amount(writer, self.value)?;
        writer.write_var_bytes(self.locking_script.to_bytes());
        Ok(())
    }
}

/// Write `amount` as a 48-bit little-endian value in an 8-byte slot.
pub(crate) fn write_digest_amount(writer: &mut ByteWriter, amount: u64) -> Result<(), TransactionError> {
    writer
        .write_uint_le(amount, DIGEST_AMOUNT_WIDTH)
        .map_err(|e| match e {
            PrimitivesError::ValueOverflow { value, .. } => TransactionError::AmountTooLarge {
                amount: value,
                max: MAX_DIGEST_AMOUNT,
            },
            other => TransactionError::Primitives(other),
        })?;
    writer.write_zeros(8 - DIGEST_AMOUNT_WIDTH);
    Ok(())
}
