//! Locking-script codec for the two output kinds a vault spend creates.
//!
//! Both functions return the bare script; transaction serialization and
//! the digest preimages prepend the compact length, which makes a P2PKH
//! script 26 bytes on the wire.

use crate::address::{Address, Network};
use crate::opcodes::OP_RETURN;
use crate::{Script, ScriptError};

/// Maximum memo length in UTF-8 bytes.
pub const MAX_MEMO_LEN: usize = 80;

/// Decode `address` for `network` and build its P2PKH locking script.
///
/// # Returns
/// The 25-byte script, or an address error if the checksum, length or
/// prefix check fails.
pub fn address_to_script(address: &str, network: Network) -> Result<Script, ScriptError> {
    let addr = Address::from_string_for(address, network)?;
    Ok(Script::p2pkh(&addr.public_key_hash))
}

/// Build the data-carrier script `OP_RETURN <push(memo)>`.
///
/// Memos longer than 75 bytes use OP_PUSHDATA1.
///
/// # Returns
/// The script, or `MemoTooLong` when the memo exceeds 80 bytes.
pub fn memo_to_script(memo: &str) -> Result<Script, ScriptError> {
    let data = memo.as_bytes();
    if data.len() > MAX_MEMO_LEN {
        return Err(ScriptError::MemoTooLong {
            len: data.len(),
            max: MAX_MEMO_LEN,
        });
    }
    let mut script = Script::new();
    script.append_opcode(OP_RETURN);
    script.append_push_data(data)?;
    Ok(script)
}
