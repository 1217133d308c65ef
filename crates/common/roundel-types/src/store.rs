use async_trait::async_trait;
use thiserror::Error;

use crate::{Round, Snapshot};
use roundel_core_types::{NodeIdentity, RoundHash};

/// Errors surfaced by round storage backends.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("round not found: {0}")]
    RoundNotFound(RoundHash),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Read interface over persisted rounds and their snapshots.
///
/// Implementations must support concurrent readers without external
/// locking, and must return snapshots in the round-internal canonical
/// order (ascending timestamp) — round hash recomputation is
/// order-sensitive.
#[async_trait]
pub trait RoundStore: Send + Sync {
    /// All snapshots belonging to `(node, number)`, in canonical order.
    async fn read_snapshots_for_node_round(
        &self,
        node: &NodeIdentity,
        number: u64,
    ) -> Result<Vec<Snapshot>, StorageError>;

    /// The round record addressed by its content hash.
    async fn read_round(&self, hash: &RoundHash) -> Result<Round, StorageError>;
}
