//! JSON-RPC client for UTXO lookup, chain state and broadcast.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use zt_primitives::chainhash::Hash;
use zt_transaction::{Broadcaster, TransactionError, UnspentOutput, UtxoSource};

use crate::error::RpcError;
use crate::types::{AddressBalance, BlockHeight, RpcConfig, RpcRequest, RpcResponse};

/// HTTP client for a node's JSON-RPC interface.
#[derive(Debug)]
pub struct RpcClient {
    /// Client configuration.
    config: RpcConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
    /// Source of request ids.
    next_id: AtomicU64,
}

impl RpcClient {
    /// Create a new client after validating `config`.
    pub fn new(config: RpcConfig) -> Result<Self, RpcError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            config,
            client,
            next_id: AtomicU64::new(1),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Call `method` with `params` and decode its `result`.
    ///
    /// A reply carrying an `error` object becomes [`RpcError::Rpc`],
    /// whatever the HTTP status.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, RpcError> {
        let req = RpcRequest {
            jsonrpc: "1.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        tracing::debug!(method, id = req.id, "sending RPC request");

        let resp = self
            .client
            .post(&self.config.host)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        let reply: RpcResponse = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(method, %status, "undecodable RPC reply");
            RpcError::InvalidResponse {
                method: method.to_string(),
                reason: format!("HTTP {}: {}", status, e),
            }
        })?;

        if let Some(err) = reply.error {
            tracing::error!(method, code = err.code, message = %err.message, "RPC call failed");
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        serde_json::from_value(reply.result).map_err(|e| RpcError::InvalidResponse {
            method: method.to_string(),
            reason: e.to_string(),
        })
    }

    /// List the unspent outputs of `address` (`getaddressutxos`).
    pub async fn list_utxos(&self, address: &str) -> Result<Vec<UnspentOutput>, RpcError> {
        self.call("getaddressutxos", vec![json!({ "addresses": [address] })])
            .await
    }

    /// Read the balance of `address` (`getaddressbalance`).
    pub async fn get_balance(&self, address: &str) -> Result<u64, RpcError> {
        let balance: AddressBalance = self
            .call("getaddressbalance", vec![json!({ "addresses": [address] })])
            .await?;
        Ok(balance.balance)
    }

    /// Read the chain tip: `getblockcount` followed by `getblockhash`.
    pub async fn latest_height(&self) -> Result<BlockHeight, RpcError> {
        let number: u32 = self.call("getblockcount", vec![]).await?;
        let hash: String = self.call("getblockhash", vec![number.into()]).await?;
        let hash = Hash::from_hex(&hash).map_err(|e| RpcError::InvalidResponse {
            method: "getblockhash".to_string(),
            reason: e.to_string(),
        })?;
        Ok(BlockHeight { number, hash })
    }

    /// Broadcast a raw transaction (`sendrawtransaction`), returning the
    /// txid the node reports.
    pub async fn send_raw_transaction(&self, raw_tx: &[u8]) -> Result<String, RpcError> {
        let txid: String = self
            .call("sendrawtransaction", vec![hex::encode(raw_tx).into()])
            .await?;
        tracing::info!(%txid, "transaction accepted by node");
        Ok(txid)
    }
}

impl UtxoSource for RpcClient {
    async fn fetch_unspent_outputs(
        &self,
        address: &str,
    ) -> Result<Vec<UnspentOutput>, TransactionError> {
        Ok(self.list_utxos(address).await?)
    }
}

impl Broadcaster for RpcClient {
    async fn submit(&self, raw_tx: &[u8]) -> Result<String, TransactionError> {
        Ok(self.send_raw_transaction(raw_tx).await?)
    }
}
