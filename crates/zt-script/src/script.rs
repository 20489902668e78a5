/// Script type - a sequence of opcodes and data pushes.
///
/// Scripts appear in transaction inputs (unlocking) and outputs (locking).
/// The Script wraps a `Vec<u8>` and provides construction, classification
/// and data extraction for the two output kinds this SDK emits.

use std::fmt;

use crate::chunk::{decode_script, push_data_prefix, ScriptChunk};
use crate::opcodes::*;
use crate::ScriptError;

/// Length of a P2PKH locking script without its length prefix.
pub const P2PKH_SCRIPT_LEN: usize = 25;

/// A script, represented as a byte vector newtype.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Script(Vec<u8>);

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string (e.g. "76a914...88ac").
    ///
    /// # Returns
    /// A `Script` wrapping the decoded bytes, or an error if the hex is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        Ok(Script(bytes))
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    /// Build the P2PKH locking script for a 20-byte public key hash.
    ///
    /// Pattern: OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG
    pub fn p2pkh(public_key_hash: &[u8; 20]) -> Self {
        let mut b = Vec::with_capacity(P2PKH_SCRIPT_LEN);
        b.extend_from_slice(&[OP_DUP, OP_HASH160, OP_DATA_20]);
        b.extend_from_slice(public_key_hash);
        b.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
        Script(b)
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Return the script as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Return the raw script bytes.
    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Script classification
    // -----------------------------------------------------------------------

    /// Check if this is a Pay-to-Public-Key-Hash (P2PKH) output script.
    pub fn is_p2pkh(&self) -> bool {
        let b = &self.0;
        b.len() == P2PKH_SCRIPT_LEN
            && b[0] == OP_DUP
            && b[1] == OP_HASH160
            && b[2] == OP_DATA_20
            && b[23] == OP_EQUALVERIFY
            && b[24] == OP_CHECKSIG
    }

    /// Check if this script begins with OP_RETURN.
    pub fn is_data(&self) -> bool {
        self.0.first() == Some(&OP_RETURN)
    }

    // -----------------------------------------------------------------------
    // Data extraction
    // -----------------------------------------------------------------------

    /// Extract the public key hash from a P2PKH script.
    ///
    /// # Returns
    /// The 20-byte public key hash, or `NotP2PKH`.
    pub fn public_key_hash(&self) -> Result<[u8; 20], ScriptError> {
        if !self.is_p2pkh() {
            return Err(ScriptError::NotP2PKH);
        }
        let mut pkh = [0u8; 20];
        pkh.copy_from_slice(&self.0[3..23]);
        Ok(pkh)
    }

    /// Extract the payload of a data-carrier script (`OP_RETURN <push>`).
    ///
    /// # Returns
    /// The pushed bytes, or `NotDataCarrier` if the script has any other shape.
    pub fn data_carrier_payload(&self) -> Result<Vec<u8>, ScriptError> {
        let mut chunks = self.chunks()?.into_iter();
        match (chunks.next(), chunks.next(), chunks.next()) {
            (Some(ScriptChunk { op: OP_RETURN, .. }), Some(ScriptChunk { data: Some(d), .. }), None) => Ok(d),
            _ => Err(ScriptError::NotDataCarrier),
        }
    }

    /// Parse the script into a vector of decoded chunks.
    pub fn chunks(&self) -> Result<Vec<ScriptChunk>, ScriptError> {
        decode_script(&self.0)
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    /// Append data bytes to the script with the minimal push prefix.
    ///
    /// # Returns
    /// `Ok(())` on success, or an error if the data is too large.
    pub fn append_push_data(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        let prefix = push_data_prefix(data.len())?;
        self.0.extend_from_slice(&prefix);
        self.0.extend_from_slice(data);
        Ok(())
    }

    /// Append a single non-push opcode.
    pub fn append_opcode(&mut self, op: u8) {
        self.0.push(op);
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PKH: &str = "936667ff8d2d41361a4df4a370b309fb15380eac";

    fn pkh() -> [u8; 20] {
        let mut out = [0u8; 20];
        out.copy_from_slice(&hex::decode(PKH).unwrap());
        out
    }

    #[test]
    fn test_p2pkh_layout() {
        let script = Script::p2pkh(&pkh());
        assert_eq!(script.to_hex(), format!("76a914{}88ac", PKH));
        assert_eq!(script.len(), P2PKH_SCRIPT_LEN);
        assert!(script.is_p2pkh());
        assert!(!script.is_data());
        assert_eq!(script.public_key_hash().unwrap(), pkh());
    }

    #[test]
    fn test_public_key_hash_rejects_other_scripts() {
        let script = Script::from_hex("6a044d454d4f").unwrap();
        assert!(matches!(script.public_key_hash(), Err(ScriptError::NotP2PKH)));
        let mut truncated = Script::p2pkh(&pkh()).to_bytes().to_vec();
        truncated.pop();
        assert!(Script::from_bytes(&truncated).public_key_hash().is_err());
    }

    #[test]
    fn test_data_carrier_payload() {
        let mut script = Script::new();
        script.append_opcode(OP_RETURN);
        script.append_push_data(b"MEMO").unwrap();
        assert_eq!(script.to_hex(), "6a044d454d4f");
        assert!(script.is_data());
        assert_eq!(script.data_carrier_payload().unwrap(), b"MEMO".to_vec());
    }

    #[test]
    fn test_data_carrier_payload_rejects_extra_chunks() {
        let script = Script::from_hex("6a044d454d4f00").unwrap();
        assert!(matches!(
            script.data_carrier_payload(),
            Err(ScriptError::NotDataCarrier)
        ));
        assert!(Script::p2pkh(&pkh()).data_carrier_payload().is_err());
        assert!(Script::from_hex("6a").unwrap().data_carrier_payload().is_err());
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(Script::from_hex("zz"), Err(ScriptError::InvalidHex(_))));
    }
}
