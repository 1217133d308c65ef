use serde::{Deserialize, Serialize};

use crate::Timestamp;
use roundel_core_types::{NodeIdentity, RoundHash};

/// The persisted record for one `(node, round number)` pair.
///
/// A round is addressed both by that natural key and by its derived
/// content hash; both lookup paths must resolve to the same record.
/// Rounds are created by round closing elsewhere and are read-only here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Round {
    /// Identity of the node this round belongs to
    pub node_id: NodeIdentity,
    /// Round number, monotonically increasing per node
    pub number: u64,
    /// Round start timestamp; must equal the recomputed start
    pub timestamp: Timestamp,
    /// Hashes of prior rounds this round depends on (the DAG edges)
    pub references: Vec<RoundHash>,
}
