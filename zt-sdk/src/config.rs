//! Process configuration: node endpoint and network.

use serde::{Deserialize, Serialize};
use zt_rpc::RpcConfig;
use zt_script::Network;

use crate::SdkError;

/// SDK configuration.
///
/// ```
/// let config = zt_sdk::Config::from_json(
///     r#"{"server": {"host": "http://127.0.0.1:8232"}, "network": "mainnet"}"#,
/// )
/// .unwrap();
/// assert_eq!(config.network, zt_sdk::script::Network::Mainnet);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Node RPC endpoint and credentials.
    pub server: RpcConfig,
    /// Network whose prefixes and branch id are used.
    pub network: Network,
}

impl Config {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| SdkError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration's shape.
    pub fn validate(&self) -> Result<(), SdkError> {
        self.server
            .validate()
            .map_err(|e| SdkError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full() {
        let config = Config::from_json(
            r#"{
                "server": {
                    "host": "https://node.example:8232",
                    "user": "zcash",
                    "password": "secret",
                    "timeout_secs": 10
                },
                "network": "mainnet"
            }"#,
        )
        .unwrap();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.server.user, "zcash");
        assert_eq!(config.server.timeout_secs, 10);
    }

    #[test]
    fn test_from_json_defaults_to_testnet() {
        let config = Config::from_json(r#"{"server": {"host": "http://localhost:18232"}}"#).unwrap();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.server.timeout_secs, 30);
    }

    #[test]
    fn test_from_json_rejects_bad_shape() {
        assert!(matches!(
            Config::from_json(r#"{"server": {"host": "localhost"}}"#),
            Err(SdkError::Config(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"network": "regtest"}"#),
            Err(SdkError::Config(_))
        ));
        assert!(Config::from_json("not json").is_err());
    }
}
