/// Zcash transparent SDK - Scripts, push-data chunks, and addresses.
///
/// Provides the `Script` type, the opcodes used by transparent outputs,
/// script chunk parsing, transparent P2PKH addresses with their two-byte
/// network prefixes, and the locking-script codec for payment and memo
/// outputs.

pub mod script;
pub mod opcodes;
pub mod chunk;
pub mod address;
pub mod codec;

mod error;
pub use error::ScriptError;
pub use script::Script;
pub use address::{is_valid_addr, Address, Network};
pub use chunk::ScriptChunk;
pub use codec::{address_to_script, memo_to_script, MAX_MEMO_LEN};
