/// Transparent address handling.
///
/// Supports P2PKH address generation from public keys and key hashes,
/// strict validation against a network's two-byte prefix, and
/// mainnet/testnet discrimination. Uses Base58Check encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zt_primitives::base58;
use zt_primitives::ec::PublicKey;
use zt_primitives::PrimitivesError;

use crate::ScriptError;

/// Mainnet P2PKH address prefix ("t1...").
pub const MAINNET_P2PKH: [u8; 2] = [0x1c, 0xb8];
/// Testnet P2PKH address prefix ("tm...").
pub const TESTNET_P2PKH: [u8; 2] = [0x1d, 0x25];

/// Consensus branch id of the NU6 network upgrade.
pub const NU6_BRANCH_ID: u32 = 0xC8E7_1055;

/// Decoded payload length: 2-byte prefix + 20-byte key hash.
const ADDRESS_PAYLOAD_LEN: usize = 22;

/// Network selector for address prefixes and consensus parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Zcash mainnet (P2PKH prefix 0x1CB8, addresses start with "t1").
    Mainnet,
    /// Zcash testnet (P2PKH prefix 0x1D25, addresses start with "tm").
    #[default]
    Testnet,
}

impl Network {
    /// The two-byte P2PKH address prefix.
    pub fn p2pkh_prefix(&self) -> [u8; 2] {
        match self {
            Network::Mainnet => MAINNET_P2PKH,
            Network::Testnet => TESTNET_P2PKH,
        }
    }

    /// The consensus branch id transactions are bound to.
    ///
    /// Mainnet and testnet activate the same upgrade, so the id is shared.
    pub fn consensus_branch_id(&self) -> u32 {
        NU6_BRANCH_ID
    }

    /// The WIF version byte for secret keys on this network.
    pub fn wif_prefix(&self) -> u8 {
        match self {
            Network::Mainnet => zt_primitives::ec::private_key::MAINNET_WIF_PREFIX,
            Network::Testnet => zt_primitives::ec::private_key::TESTNET_WIF_PREFIX,
        }
    }

    fn from_p2pkh_prefix(prefix: &[u8]) -> Option<Self> {
        match prefix {
            p if p == MAINNET_P2PKH => Some(Network::Mainnet),
            p if p == TESTNET_P2PKH => Some(Network::Testnet),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// A transparent P2PKH address.
///
/// Contains the 20-byte public key hash and the network it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    /// The human-readable Base58Check address string.
    pub address_string: String,
    /// The 20-byte RIPEMD-160(SHA-256(pubkey)) hash.
    pub public_key_hash: [u8; 20],
    /// The network this address belongs to.
    pub network: Network,
}

impl Address {
    /// Parse a Base58Check address string, detecting its network.
    ///
    /// # Arguments
    /// * `addr` - The Base58Check address string.
    ///
    /// # Returns
    /// An `Address`, or an error if the checksum, length or prefix is invalid.
    pub fn from_string(addr: &str) -> Result<Self, ScriptError> {
        let payload = decode_payload(addr)?;
        let network = Network::from_p2pkh_prefix(&payload[..2])
            .ok_or_else(|| ScriptError::UnsupportedAddress(addr.to_string()))?;

        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&payload[2..]);

        Ok(Address {
            address_string: addr.to_string(),
            public_key_hash: pkh,
            network,
        })
    }

    /// Parse an address that must belong to `network`.
    ///
    /// A well-formed address for the other network is rejected with
    /// `WrongNetwork`, never coerced.
    pub fn from_string_for(addr: &str, network: Network) -> Result<Self, ScriptError> {
        let parsed = Self::from_string(addr).map_err(|e| match e {
            ScriptError::UnsupportedAddress(_) => wrong_network(addr, network),
            other => other,
        })?;
        if parsed.network != network {
            return Err(wrong_network(addr, network));
        }
        Ok(parsed)
    }

    /// Create an address from a 20-byte public key hash.
    pub fn from_public_key_hash(hash: &[u8; 20], network: Network) -> Self {
        let mut payload = Vec::with_capacity(ADDRESS_PAYLOAD_LEN);
        payload.extend_from_slice(&network.p2pkh_prefix());
        payload.extend_from_slice(hash);

        Address {
            address_string: base58::check_encode(&payload),
            public_key_hash: *hash,
            network,
        }
    }

    /// Create an address paying to a public key.
    pub fn from_public_key(pub_key: &PublicKey, network: Network) -> Self {
        Self::from_public_key_hash(&pub_key.hash160(), network)
    }
}

impl fmt::Display for Address {
    /// Display the address as its Base58Check string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address_string)
    }
}

impl FromStr for Address {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_string(s)
    }
}

/// Check that `address` decodes, carries a valid checksum, and uses `prefix`.
///
/// Never fails; any decoding problem yields `false`.
pub fn is_valid_addr(address: &str, prefix: [u8; 2]) -> bool {
    match decode_payload(address) {
        Ok(payload) => payload[..2] == prefix,
        Err(_) => false,
    }
}

/// Base58Check-decode and length-check an address payload.
fn decode_payload(addr: &str) -> Result<Vec<u8>, ScriptError> {
    let payload = base58::check_decode(addr).map_err(|e| match e {
        PrimitivesError::ChecksumMismatch => ScriptError::EncodingChecksumFailed(addr.to_string()),
        other => ScriptError::InvalidAddress(format!("{}: {}", addr, other)),
    })?;
    if payload.len() != ADDRESS_PAYLOAD_LEN {
        return Err(ScriptError::InvalidAddressLength(addr.to_string()));
    }
    Ok(payload)
}

fn wrong_network(addr: &str, network: Network) -> ScriptError {
    let prefix = base58::check_decode(addr)
        .ok()
        .and_then(|p| p.get(..2).map(hex::encode))
        .unwrap_or_default();
    ScriptError::WrongNetwork {
        address: addr.to_string(),
        prefix,
        expected: hex::encode(network.p2pkh_prefix()),
    }
}
