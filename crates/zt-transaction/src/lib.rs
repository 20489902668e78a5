/// Zcash transparent SDK - Transaction building, signing, and serialization.
///
/// Turns a funding address, a destination, an amount and a memo into a
/// signed NU5/NU6 (v5) transparent transaction:
/// - fee model and greedy coin selection
/// - the v5 wire format (serialize and parse)
/// - the ZIP-244 signature digest with shared digests computed once
/// - P2PKH signing with low-S DER signatures

pub mod fee;
pub mod selector;
pub mod utxo;
pub mod payment;
pub mod transaction;
pub mod input;
pub mod output;
pub mod sighash;
pub mod template;
pub mod source;
pub mod builder;

mod error;
pub use error::TransactionError;
pub use builder::{build_tx, build_unsigned, sign_and_finalize, sign_and_finalize_with, TxBytes};
pub use payment::{Output, Payment, UnsignedTransaction, MAX_AMOUNT};
pub use sighash::{ShieldedDigests, TxDigests};
pub use source::{Broadcaster, UtxoSource};
pub use transaction::Transaction;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use utxo::UnspentOutput;
