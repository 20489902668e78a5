//! Script chunk parsing and encoding.
//!
//! A script chunk is either an opcode or a data push with its associated bytes.
//! This module handles decoding raw script bytes into structured chunks and
//! encoding push data with the correct OP_PUSHDATA prefix.

use crate::opcodes::*;
use crate::ScriptError;

/// A single parsed element of a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptChunk {
    /// The opcode byte. For direct pushes (0-75 bytes), this is the length.
    pub op: u8,
    /// The data payload, if this chunk is a push operation.
    pub data: Option<Vec<u8>>,
}

/// Decode raw script bytes into a vector of `ScriptChunk` values.
///
/// Handles OP_0, direct pushes of 1-75 bytes and OP_PUSHDATA1/2/4. Every
/// other byte, OP_RETURN included, becomes a bare opcode chunk, so a
/// data-carrier script decodes as `[OP_RETURN, push(data)]`.
///
/// # Returns
/// A vector of parsed chunks, or `DataTooSmall` if a push is truncated.
pub fn decode_script(bytes: &[u8]) -> Result<Vec<ScriptChunk>, ScriptError> {
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let op = bytes[pos];
        let (header_len, length) = match op {
            OP_0 => (1, 0),
            0x01..=OP_DATA_75 => (1, op as usize),
            OP_PUSHDATA1 => (2, read_len(bytes, pos + 1, 1)?),
            OP_PUSHDATA2 => (3, read_len(bytes, pos + 1, 2)?),
            OP_PUSHDATA4 => (5, read_len(bytes, pos + 1, 4)?),
            _ => {
                chunks.push(ScriptChunk { op, data: None });
                pos += 1;
                continue;
            }
        };

        let start = pos + header_len;
        if bytes.len() < start + length {
            return Err(ScriptError::DataTooSmall);
        }
        chunks.push(ScriptChunk {
            op,
            data: Some(bytes[start..start + length].to_vec()),
        });
        pos = start + length;
    }

    Ok(chunks)
}

/// Read a `width`-byte little-endian push length at `at`.
fn read_len(bytes: &[u8], at: usize, width: usize) -> Result<usize, ScriptError> {
    let raw = bytes.get(at..at + width).ok_or(ScriptError::DataTooSmall)?;
    let mut buf = [0u8; 8];
    buf[..width].copy_from_slice(raw);
    usize::try_from(u64::from_le_bytes(buf)).map_err(|_| ScriptError::DataTooBig)
}

/// Compute the OP_PUSHDATA prefix bytes for a data payload of the given length.
///
/// Chooses the minimal encoding: direct push for 0-75 bytes, OP_PUSHDATA1
/// for 76-255, OP_PUSHDATA2 up to 65535, OP_PUSHDATA4 beyond.
///
/// # Arguments
/// * `data_len` - The length of the data to be pushed.
///
/// # Returns
/// The prefix bytes, or `DataTooBig` if the length exceeds four bytes.
pub fn push_data_prefix(data_len: usize) -> Result<Vec<u8>, ScriptError> {
    if data_len <= OP_DATA_75 as usize {
        Ok(vec![data_len as u8])
    } else if data_len <= 0xFF {
        Ok(vec![OP_PUSHDATA1, data_len as u8])
    } else if data_len <= 0xFFFF {
        let mut buf = vec![OP_PUSHDATA2];
        buf.extend_from_slice(&(data_len as u16).to_le_bytes());
        Ok(buf)
    } else if data_len <= 0xFFFF_FFFF {
        let mut buf = vec![OP_PUSHDATA4];
        buf.extend_from_slice(&(data_len as u32).to_le_bytes());
        Ok(buf)
    } else {
        Err(ScriptError::DataTooBig)
    }
}
