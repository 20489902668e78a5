//! The vault facade: one funding key, one network, one node.

use zt_primitives::ec::public_key::COMPRESSED_LEN;
use zt_primitives::ec::{PrivateKey, PublicKey};
use zt_rpc::{BlockHeight, RpcClient};
use zt_script::{is_valid_addr, Address, Network};
use zt_transaction::{build_tx, sign_and_finalize, Broadcaster, Payment, TxBytes, UtxoSource};

use crate::config::Config;
use crate::SdkError;

/// A transparent key pair and the address it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransparentKey {
    /// The secret key.
    pub sk: PrivateKey,
    /// The compressed public key.
    pub pk: PublicKey,
    /// The P2PKH address of `pk`.
    pub address: Address,
}

/// Builds, signs and broadcasts vault payments.
///
/// `N` is the node collaborator; [`RpcClient`] in production, any
/// [`UtxoSource`] / [`Broadcaster`] in tests.
#[derive(Debug)]
pub struct Vault<N = RpcClient> {
    network: Network,
    node: N,
}

impl Vault<RpcClient> {
    /// Create a vault talking to the node described by `config`.
    pub fn new(config: Config) -> Result<Self, SdkError> {
        config.validate()?;
        let node = RpcClient::new(config.server)?;
        tracing::info!(network = %config.network, host = %node.config().host, "vault ready");
        Ok(Vault {
            network: config.network,
            node,
        })
    }

    /// Balance of `address` in zatoshi.
    pub async fn balance(&self, address: &str) -> Result<u64, SdkError> {
        Ok(self.node.get_balance(address).await?)
    }

    /// The node's chain tip.
    pub async fn latest_height(&self) -> Result<BlockHeight, SdkError> {
        Ok(self.node.latest_height().await?)
    }
}

impl<N> Vault<N> {
    /// Create a vault over an arbitrary node collaborator.
    pub fn with_node(network: Network, node: N) -> Self {
        Vault { network, node }
    }

    /// The configured network.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The node collaborator.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Import a WIF secret key for this vault's network.
    ///
    /// A well-formed key encoded for the other network is rejected.
    pub fn import_wif(&self, wif: &str) -> Result<TransparentKey, SdkError> {
        let (sk, version) = PrivateKey::from_wif(wif)?;
        if version != self.network.wif_prefix() {
            return Err(SdkError::WrongKeyNetwork {
                expected: self.network.wif_prefix(),
                got: version,
            });
        }
        let pk = sk.pub_key();
        let address = Address::from_public_key(&pk, self.network);
        Ok(TransparentKey { sk, pk, address })
    }

    /// Derive the P2PKH address of a compressed public key.
    pub fn vault_address(&self, pubkey: &[u8]) -> Result<String, SdkError> {
        if pubkey.len() != COMPRESSED_LEN {
            return Err(SdkError::InvalidPubkeyLength(pubkey.len()));
        }
        let pk = PublicKey::from_bytes(pubkey)?;
        Ok(Address::from_public_key(&pk, self.network).to_string())
    }

    /// Whether `address` is a valid P2PKH address on this network.
    pub fn validate_address(&self, address: &str) -> bool {
        is_valid_addr(address, self.network.p2pkh_prefix())
    }
}

impl<N: UtxoSource + Sync> Vault<N> {
    /// Pay `amount` from `key`'s address to `to`, returning the signed
    /// transaction. Change returns to `key`'s address.
    pub async fn pay(
        &self,
        key: &TransparentKey,
        to: &str,
        amount: u64,
        memo: &str,
        height: u32,
    ) -> Result<TxBytes, SdkError> {
        let payment = Payment {
            height,
            from: key.address.to_string(),
            to: to.to_string(),
            amount,
            memo: memo.to_string(),
        };
        let unsigned = build_tx(&self.node, self.network, &payment).await?;
        Ok(sign_and_finalize(&unsigned, &key.sk)?)
    }
}

impl<N: Broadcaster + Sync> Vault<N> {
    /// Submit a signed transaction, returning the node's txid.
    pub async fn broadcast(&self, tx: &TxBytes) -> Result<String, SdkError> {
        let txid = self.node.submit(&tx.data).await?;
        if txid != tx.txid.to_string() {
            tracing::warn!(expected = %tx.txid, reported = %txid, "node reported a different txid");
        }
        Ok(txid)
    }
}
