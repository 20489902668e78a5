//! Collaborator interfaces for UTXO lookup and broadcast.
//!
//! The node client implements both; tests substitute in-memory fakes.

use std::future::Future;

use crate::utxo::UnspentOutput;
use crate::TransactionError;

/// Supplies the spendable outputs of an address.
pub trait UtxoSource {
    /// Fetch the unspent outputs of `address`, in the order selection
    /// should consider them.
    ///
    /// Failures surface as `TransactionError::Transport`.
    fn fetch_unspent_outputs(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Vec<UnspentOutput>, TransactionError>> + Send;
}

/// Submits a signed transaction to the network.
pub trait Broadcaster {
    /// Submit raw transaction bytes, returning the txid the node reports.
    fn submit(
        &self,
        raw_tx: &[u8],
    ) -> impl Future<Output = Result<String, TransactionError>> + Send;
}
