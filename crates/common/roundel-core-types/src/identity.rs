use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::codec::{parse_node_identity, IdentifierError};

/// The fixed-size binary identifier of a ledger participant.
///
/// Immutable once parsed; compared and hashed by value. The textual form
/// is lowercase hex, which is also how it serializes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdentity([u8; 32]);

impl NodeIdentity {
    /// Derive a node identity by hashing the provided bytes.
    pub fn digest(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();
        let mut array = [0u8; 32];
        array.copy_from_slice(&result);
        NodeIdentity(array)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; 32]> for NodeIdentity {
    fn from(bytes: [u8; 32]) -> Self {
        NodeIdentity(bytes)
    }
}

impl FromStr for NodeIdentity {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_node_identity(s)
    }
}

impl fmt::Debug for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIdentity({})", self.to_hex())
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// Serialize as a hex string so identities read naturally in RPC output.
impl Serialize for NodeIdentity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for NodeIdentity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let node = NodeIdentity::digest(b"node-one");
        let parsed: NodeIdentity = node.to_hex().parse().unwrap();
        assert_eq!(parsed, node);
    }

    #[test]
    fn serde_as_hex_string() {
        let node = NodeIdentity::digest(b"node-one");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, format!("\"{}\"", node.to_hex()));
        let back: NodeIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
