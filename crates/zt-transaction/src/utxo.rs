//! Spendable outputs as reported by the node.

use serde::{Deserialize, Serialize};
use zt_primitives::chainhash::Hash;

/// A transparent output available for spending.
///
/// `txid` is stored in wire order; it is parsed from and rendered as the
/// byte-reversed hex the node reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnspentOutput {
    /// Address that can spend the output.
    pub address: String,
    /// Id of the transaction that created the output.
    pub txid: Hash,
    /// Index of the output within that transaction.
    pub output_index: u32,
    /// Value in zatoshi.
    pub satoshis: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_node_utxo() {
        let json = r#"{
            "address": "tmP9jLgTnhDdKdWJCm4BT2t6acGnxqP14yU",
            "txid": "d4f4c1a1e2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d",
            "outputIndex": 0,
            "script": "76a914936667ff8d2d41361a4df4a370b309fb15380eac88ac",
            "satoshis": 400000,
            "height": 150
        }"#;
        let utxo: UnspentOutput = serde_json::from_str(json).unwrap();
        assert_eq!(utxo.output_index, 0);
        assert_eq!(utxo.satoshis, 400_000);
        assert_eq!(utxo.txid.as_bytes()[0], 0x5d);
    }

    #[test]
    fn test_deserialize_rejects_short_txid() {
        let json = r#"{"address":"tm","txid":"abcd","outputIndex":0,"satoshis":1}"#;
        assert!(serde_json::from_str::<UnspentOutput>(json).is_err());
    }
}
