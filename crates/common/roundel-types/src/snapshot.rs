use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Timestamp;
use roundel_core_types::NodeIdentity;

/// One agreed transaction record inside a round.
///
/// A snapshot belongs to exactly one `(node_id, round_number)` pair. Its
/// timestamp doubles as its position within the round: the canonical
/// snapshot order a round hash is folded over is ascending timestamp.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Identity of the node that produced this snapshot
    pub node_id: NodeIdentity,
    /// Number of the round this snapshot belongs to
    pub round_number: u64,
    /// Position within the round, in nanoseconds since the epoch
    pub timestamp: Timestamp,
    /// Digest of the transaction this snapshot commits
    pub transaction: TransactionId,
    /// Detached signature over the snapshot payload, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Vec<u8>>,
}

impl Snapshot {
    /// Canonical payload digest of this snapshot, excluding the signature.
    ///
    /// The signature is produced over the payload after the fact, so it
    /// never participates in the digest.
    pub fn payload_hash(&self) -> [u8; 32] {
        let canonical = serde_json::to_vec(&CanonicalSnapshot::from(self))
            .expect("snapshot serialization should not fail");
        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        let result = hasher.finalize();
        let mut array = [0u8; 32];
        array.copy_from_slice(&result);
        array
    }
}

/// Canonical representation of a snapshot for hashing, omitting the
/// signature field.
#[derive(Serialize)]
struct CanonicalSnapshot<'a> {
    node_id: &'a NodeIdentity,
    round_number: u64,
    timestamp: Timestamp,
    transaction: &'a TransactionId,
}

impl<'a> From<&'a Snapshot> for CanonicalSnapshot<'a> {
    fn from(snapshot: &'a Snapshot) -> Self {
        CanonicalSnapshot {
            node_id: &snapshot.node_id,
            round_number: snapshot.round_number,
            timestamp: snapshot.timestamp,
            transaction: &snapshot.transaction,
        }
    }
}

/// Digest identifying the transaction a snapshot commits. Opaque to the
/// round query layer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(pub [u8; 32]);

impl TransactionId {
    pub fn digest(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();
        let mut array = [0u8; 32];
        array.copy_from_slice(&result);
        TransactionId(array)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Debug for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransactionId({})", self.to_hex())
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for TransactionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("transaction id must be 32 bytes"))?;
        Ok(TransactionId(array))
    }
}
