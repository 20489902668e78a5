//! Payment descriptors: the request, its outputs, and the unsigned
//! transaction assembled from them.

use serde::{Deserialize, Serialize};
use zt_script::{address_to_script, memo_to_script, Address, Network, Script, ScriptError, MAX_MEMO_LEN};

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::transaction::Transaction;
use crate::utxo::UnspentOutput;
use crate::TransactionError;

/// Largest amount accepted for a payment or a spent output (1e14 zatoshi).
pub const MAX_AMOUNT: u64 = 100_000_000_000_000;

/// A transparent payment from a vault address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Expiry height written into the transaction header.
    pub height: u32,
    /// Funding address; also receives the change.
    pub from: String,
    /// Destination address.
    pub to: String,
    /// Amount paid to `to`, in zatoshi.
    pub amount: u64,
    /// Memo carried by the data-carrier output.
    pub memo: String,
}

impl Payment {
    /// Check addresses, amount and memo for `network`.
    ///
    /// Runs before any UTXO is fetched or digest computed.
    pub fn validate(&self, network: Network) -> Result<(), TransactionError> {
        check_address("from", &self.from, network)?;
        check_address("to", &self.to, network)?;
        if self.amount == 0 {
            return Err(TransactionError::InvalidTransaction(
                "payment amount must be greater than zero".to_string(),
            ));
        }
        check_amount(self.amount)?;
        if self.memo.len() > MAX_MEMO_LEN {
            return Err(TransactionError::MemoTooLong {
                len: self.memo.len(),
                max: MAX_MEMO_LEN,
            });
        }
        Ok(())
    }
}

/// A transaction output before it is lowered to a script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Output {
    /// Pay `amount` to a P2PKH address.
    Pkh { address: String, amount: u64 },
    /// A zero-value `OP_RETURN` output carrying a memo.
    DataCarrier { memo: String },
}

impl Output {
    /// Value carried by the output.
    pub fn value(&self) -> u64 {
        match self {
            Output::Pkh { amount, .. } => *amount,
            Output::DataCarrier { .. } => 0,
        }
    }

    /// Build the locking script for this output on `network`.
    pub fn locking_script(&self, network: Network) -> Result<Script, TransactionError> {
        match self {
            Output::Pkh { address, .. } => address_to_script(address, network)
                .map_err(|e| invalid_address("output", address, e)),
            Output::DataCarrier { memo } => memo_to_script(memo).map_err(|e| match e {
                ScriptError::MemoTooLong { len, max } => TransactionError::MemoTooLong { len, max },
                other => TransactionError::Script(other),
            }),
        }
    }

    fn to_transaction_output(&self, network: Network) -> Result<TransactionOutput, TransactionError> {
        Ok(TransactionOutput::new(self.value(), self.locking_script(network)?))
    }
}

/// Inputs, outputs and fee of a payment, ready for signing.
///
/// Order of `inputs` and `outputs` is fixed at construction and carried
/// unchanged into the digests and the serialized bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsignedTransaction {
    pub network: Network,
    pub height: u32,
    pub inputs: Vec<UnspentOutput>,
    pub outputs: Vec<Output>,
    pub fee: u64,
}

impl UnsignedTransaction {
    /// Lower to a wire transaction with scripts and source outputs attached
    /// and no unlocking scripts.
    pub fn to_transaction(&self) -> Result<Transaction, TransactionError> {
        let mut tx = Transaction::new(self.network, self.height);

        for utxo in &self.inputs {
            let script = address_to_script(&utxo.address, self.network)
                .map_err(|e| invalid_address("utxo", &utxo.address, e))?;
            tx.inputs.push(TransactionInput::new(
                utxo.txid,
                utxo.output_index,
                TransactionOutput::new(utxo.satoshis, script),
            ));
        }

        for output in &self.outputs {
            tx.outputs.push(output.to_transaction_output(self.network)?);
        }

        Ok(tx)
    }

    /// Sum of the spent values.
    pub fn input_total(&self) -> u64 {
        self.inputs.iter().map(|u| u.satoshis).sum()
    }

    /// Sum of the output values.
    pub fn output_total(&self) -> u64 {
        self.outputs.iter().map(Output::value).sum()
    }
}

pub(crate) fn check_address(
    field: &'static str,
    address: &str,
    network: Network,
) -> Result<Address, TransactionError> {
    Address::from_string_for(address, network).map_err(|e| invalid_address(field, address, e))
}

pub(crate) fn check_amount(amount: u64) -> Result<(), TransactionError> {
    if amount > MAX_AMOUNT {
        return Err(TransactionError::AmountTooLarge {
            amount,
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

fn invalid_address(field: &'static str, address: &str, err: ScriptError) -> TransactionError {
    TransactionError::InvalidAddress {
        field,
        address: address.to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROM: &str = "tmP9jLgTnhDdKdWJCm4BT2t6acGnxqP14yU";
    const TO: &str = "tmGys6dBuEGjch5LFnhdo5gpSa7jiNRWse6";

    fn payment() -> Payment {
        Payment {
            height: 200,
            from: FROM.to_string(),
            to: TO.to_string(),
            amount: 1_000_000,
            memo: "MEMO".to_string(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(payment().validate(Network::Testnet).is_ok());
    }

    #[test]
    fn test_validate_reports_field() {
        let mut p = payment();
        p.to = "t1XJz1qyPJZ7pVG6m6KsiBDRq1Hi9Pvt3E6".to_string();
        match p.validate(Network::Testnet) {
            Err(TransactionError::InvalidAddress { field, address, .. }) => {
                assert_eq!(field, "to");
                assert_eq!(address, p.to);
            }
            other => panic!("expected InvalidAddress, got {:?}", other),
        }

        match payment().validate(Network::Mainnet) {
            Err(TransactionError::InvalidAddress { field, .. }) => assert_eq!(field, "from"),
            other => panic!("expected InvalidAddress, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_zero_amount() {
        let mut p = payment();
        p.amount = 0;
        assert!(matches!(
            p.validate(Network::Testnet),
            Err(TransactionError::InvalidTransaction(_))
        ));
    }

    #[test]
    fn test_output_value_and_script() {
        let pkh = Output::Pkh {
            address: TO.to_string(),
            amount: 5,
        };
        assert_eq!(pkh.value(), 5);
        assert_eq!(
            pkh.locking_script(Network::Testnet).unwrap().to_hex(),
            "76a9144fb7f7b9ea3859086b151cde4d3c75152e51547288ac"
        );

        let memo = Output::DataCarrier {
            memo: "MEMO".to_string(),
        };
        assert_eq!(memo.value(), 0);
        assert_eq!(memo.locking_script(Network::Testnet).unwrap().to_hex(), "6a044d454d4f");
    }

    #[test]
    fn test_output_memo_too_long() {
        let memo = Output::DataCarrier {
            memo: "x".repeat(81),
        };
        assert!(matches!(
            memo.locking_script(Network::Testnet),
            Err(TransactionError::MemoTooLong { len: 81, max: 80 })
        ));
    }

    #[test]
    fn test_output_serde_tagging() {
        let json = serde_json::to_string(&Output::DataCarrier {
            memo: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"dataCarrier","memo":"hi"}"#);
    }
}
