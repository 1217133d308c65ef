use serde::Serialize;

use roundel_core_types::{NodeIdentity, RoundHash};
use roundel_types::{Snapshot, Timestamp, TransactionId};

/// The caller-facing shape of a verified round, independent of
/// transport encoding.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundView {
    pub node: NodeIdentity,
    pub hash: RoundHash,
    pub start: Timestamp,
    pub end: Timestamp,
    pub number: u64,
    pub references: Vec<RoundHash>,
    pub snapshots: Vec<SnapshotView>,
}

/// Public rendering of one snapshot. The signature field is only
/// populated when the caller asked for it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SnapshotView {
    pub node: NodeIdentity,
    pub round: u64,
    pub timestamp: Timestamp,
    pub transaction: TransactionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Render a snapshot set into its public views.
pub fn snapshot_views(snapshots: &[Snapshot], include_signature: bool) -> Vec<SnapshotView> {
    snapshots
        .iter()
        .map(|snapshot| SnapshotView {
            node: snapshot.node_id,
            round: snapshot.round_number,
            timestamp: snapshot.timestamp,
            transaction: snapshot.transaction,
            signature: if include_signature {
                snapshot.signature.as_deref().map(hex::encode)
            } else {
                None
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_snapshot() -> Snapshot {
        Snapshot {
            node_id: NodeIdentity::digest(b"node"),
            round_number: 2,
            timestamp: 50,
            transaction: TransactionId::digest(b"tx"),
            signature: Some(vec![0xab; 4]),
        }
    }

    #[test]
    fn signatures_are_excluded_by_default() {
        let views = snapshot_views(&[signed_snapshot()], false);
        assert_eq!(views.len(), 1);
        assert!(views[0].signature.is_none());

        let json = serde_json::to_value(&views[0]).unwrap();
        assert!(json.get("signature").is_none());
    }

    #[test]
    fn signatures_render_as_hex_when_requested() {
        let views = snapshot_views(&[signed_snapshot()], true);
        assert_eq!(views[0].signature.as_deref(), Some("abababab"));
    }
}
