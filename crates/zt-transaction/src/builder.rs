//! Payment assembly and signing.
//!
//! `build_unsigned` is pure: validation, coin selection and output
//! construction over a caller-supplied UTXO set. `build_tx` adds the UTXO
//! fetch. `sign_and_finalize` computes the shared digests once, signs
//! every input and serializes.

use zt_primitives::chainhash::Hash;
use zt_primitives::ec::PrivateKey;
use zt_script::Network;

use crate::payment::{check_address, check_amount, Output, Payment, UnsignedTransaction};
use crate::selector::select_utxos;
use crate::sighash::{ShieldedDigests, TxDigests};
use crate::source::UtxoSource;
use crate::template::p2pkh;
use crate::template::UnlockingScriptTemplate;
use crate::utxo::UnspentOutput;
use crate::TransactionError;

/// A signed, serialized transaction and its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxBytes {
    pub txid: Hash,
    pub data: Vec<u8>,
}

impl TxBytes {
    /// The raw transaction as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data)
    }
}

/// Assemble the unsigned transaction for `payment` from `utxos`.
///
/// Outputs are always change (back to `from`), destination, memo, in that
/// order. The change output is emitted even when it is zero.
///
/// # Errors
/// `InvalidAddress`, `AmountTooLarge`, `MemoTooLong` or
/// `InvalidTransaction` from validation; `InsufficientFunds` when the
/// selected inputs do not cover amount plus fee.
pub fn build_unsigned(
    network: Network,
    payment: &Payment,
    utxos: &[UnspentOutput],
) -> Result<UnsignedTransaction, TransactionError> {
    payment.validate(network)?;

    let selection = select_utxos(utxos, payment.amount);
    for utxo in &selection.selected {
        check_address("utxo", &utxo.address, network)?;
        check_amount(utxo.satoshis)?;
    }

    let fee = selection.current_fee;
    let available = selection.total();
    let required = payment.amount + fee;
    let change = available
        .checked_sub(required)
        .ok_or(TransactionError::InsufficientFunds { available, required })?;

    tracing::debug!(
        inputs = selection.selected.len(),
        available,
        fee,
        change,
        "selected inputs"
    );

    Ok(UnsignedTransaction {
        network,
        height: payment.height,
        inputs: selection.selected,
        outputs: vec![
            Output::Pkh {
                address: payment.from.clone(),
                amount: change,
            },
            Output::Pkh {
                address: payment.to.clone(),
                amount: payment.amount,
            },
            Output::DataCarrier {
                memo: payment.memo.clone(),
            },
        ],
        fee,
    })
}

/// Fetch the UTXOs of `payment.from` and assemble the unsigned transaction.
///
/// The payment is validated before the source is contacted.
pub async fn build_tx<S>(
    source: &S,
    network: Network,
    payment: &Payment,
) -> Result<UnsignedTransaction, TransactionError>
where
    S: UtxoSource + ?Sized,
{
    payment.validate(network)?;

    let utxos = source.fetch_unspent_outputs(&payment.from).await.map_err(|e| {
        tracing::warn!(address = %payment.from, error = %e, "failed to fetch unspent outputs");
        e
    })?;
    tracing::info!(address = %payment.from, count = utxos.len(), "fetched unspent outputs");

    build_unsigned(network, payment, &utxos)
}

/// Sign every input with `key` and serialize, using empty shielded digests.
pub fn sign_and_finalize(
    unsigned: &UnsignedTransaction,
    key: &PrivateKey,
) -> Result<TxBytes, TransactionError> {
    sign_and_finalize_with(unsigned, key, &ShieldedDigests::default())
}

/// Sign every input with `key` and serialize.
///
/// No partially signed transaction is returned: any failure aborts the
/// whole build.
pub fn sign_and_finalize_with(
    unsigned: &UnsignedTransaction,
    key: &PrivateKey,
    shielded: &ShieldedDigests,
) -> Result<TxBytes, TransactionError> {
    let mut tx = unsigned.to_transaction()?;
    let digests = TxDigests::new(&tx, shielded)?;
    let signer = p2pkh::unlock(key.clone());

    let scripts = (0..tx.inputs.len())
        .map(|i| signer.sign(&tx, &digests, i))
        .collect::<Result<Vec<_>, _>>()?;
    for (input, script) in tx.inputs.iter_mut().zip(scripts) {
        input.unlocking_script = Some(script);
    }

    let txid = digests.txid();
    let data = tx.to_bytes();
    tracing::info!(txid = %txid, size = data.len(), inputs = tx.inputs.len(), "signed transaction");

    Ok(TxBytes { txid, data })
}
