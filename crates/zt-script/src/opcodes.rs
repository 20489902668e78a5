//! Opcode values used by transparent P2PKH and data-carrier scripts.

/// Push an empty byte vector.
pub const OP_0: u8 = 0x00;
/// Direct push of the next 20 bytes.
pub const OP_DATA_20: u8 = 0x14;
/// Direct push of the next 33 bytes.
pub const OP_DATA_33: u8 = 0x21;
/// Largest direct-push opcode (75 bytes).
pub const OP_DATA_75: u8 = 0x4b;
/// Next byte is the push length.
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Next two bytes (LE) are the push length.
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Next four bytes (LE) are the push length.
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Marks an output as provably unspendable.
pub const OP_RETURN: u8 = 0x6a;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;
