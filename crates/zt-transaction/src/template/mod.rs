//! Unlocking-script templates.
//!
//! A template turns a transaction, its precomputed digests and an input
//! index into the unlocking script for that input.

pub mod p2pkh;

use zt_script::Script;

use crate::sighash::TxDigests;
use crate::transaction::Transaction;
use crate::TransactionError;

/// Trait for signing strategies that produce unlocking scripts.
///
/// `digests` must have been computed from `tx`; implementations only add
/// the per-input work on top of them.
pub trait UnlockingScriptTemplate {
    /// Produce the unlocking script for `tx.inputs[input_index]`.
    fn sign(
        &self,
        tx: &Transaction,
        digests: &TxDigests,
        input_index: usize,
    ) -> Result<Script, TransactionError>;
}
