use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{RoundStore, StorageError};
use crate::{Round, Snapshot};
use roundel_core_types::{NodeIdentity, RoundHash};

/// An in-memory implementation of the RoundStore trait.
///
/// Keeps the by-hash round index and the by-(node, number) snapshot
/// index in step, the same dual addressing a persistent backend must
/// provide. Used as the test backend and for standalone setups.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoundStore {
    /// Map of round hash -> Round
    rounds: Arc<RwLock<HashMap<RoundHash, Round>>>,
    /// Map of (node, round number) -> snapshots in canonical order
    snapshots: Arc<RwLock<HashMap<(NodeIdentity, u64), Vec<Snapshot>>>>,
}

impl MemoryRoundStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a closed round under its hash together with its snapshot
    /// set. Snapshots are stored in canonical order (ascending
    /// timestamp) regardless of the order given.
    pub async fn write_round(
        &self,
        hash: RoundHash,
        round: Round,
        mut snapshots: Vec<Snapshot>,
    ) -> Result<(), StorageError> {
        snapshots.sort_by_key(|s| s.timestamp);
        let key = (round.node_id, round.number);

        let mut rounds = self.rounds.write().await;
        let mut snapshot_index = self.snapshots.write().await;
        rounds.insert(hash, round);
        snapshot_index.insert(key, snapshots);
        Ok(())
    }

    /// Replace the snapshot set of a stored round without touching the
    /// round record. Leaves the two indexes deliberately out of step,
    /// which is the corruption shape the query layer must detect.
    pub async fn replace_snapshots(
        &self,
        node: NodeIdentity,
        number: u64,
        mut snapshots: Vec<Snapshot>,
    ) {
        snapshots.sort_by_key(|s| s.timestamp);
        let mut snapshot_index = self.snapshots.write().await;
        snapshot_index.insert((node, number), snapshots);
    }
}

#[async_trait]
impl RoundStore for MemoryRoundStore {
    async fn read_snapshots_for_node_round(
        &self,
        node: &NodeIdentity,
        number: u64,
    ) -> Result<Vec<Snapshot>, StorageError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots
            .get(&(*node, number))
            .cloned()
            .unwrap_or_default())
    }

    async fn read_round(&self, hash: &RoundHash) -> Result<Round, StorageError> {
        let rounds = self.rounds.read().await;
        rounds
            .get(hash)
            .cloned()
            .ok_or(StorageError::RoundNotFound(*hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::TransactionId;

    fn snapshot(node: NodeIdentity, number: u64, timestamp: u64, tx: &[u8]) -> Snapshot {
        Snapshot {
            node_id: node,
            round_number: number,
            timestamp,
            transaction: TransactionId::digest(tx),
            signature: None,
        }
    }

    #[tokio::test]
    async fn write_then_read_round() {
        let store = MemoryRoundStore::new();
        let node = NodeIdentity::digest(b"node-a");
        let hash = RoundHash::digest(b"round-a-1");
        let round = Round {
            node_id: node,
            number: 1,
            timestamp: 100,
            references: vec![RoundHash::digest(b"round-a-0")],
        };

        store
            .write_round(hash, round.clone(), vec![snapshot(node, 1, 100, b"tx")])
            .await
            .unwrap();

        let read = store.read_round(&hash).await.unwrap();
        assert_eq!(read, round);
    }

    #[tokio::test]
    async fn missing_round_is_not_found() {
        let store = MemoryRoundStore::new();
        let hash = RoundHash::digest(b"absent");
        let err = store.read_round(&hash).await.unwrap_err();
        assert!(matches!(err, StorageError::RoundNotFound(h) if h == hash));
    }

    #[tokio::test]
    async fn snapshots_come_back_in_timestamp_order() {
        let store = MemoryRoundStore::new();
        let node = NodeIdentity::digest(b"node-b");
        let round = Round {
            node_id: node,
            number: 4,
            timestamp: 10,
            references: vec![],
        };
        // Written out of order on purpose.
        let snapshots = vec![
            snapshot(node, 4, 30, b"late"),
            snapshot(node, 4, 10, b"early"),
            snapshot(node, 4, 20, b"middle"),
        ];
        store
            .write_round(RoundHash::digest(b"round-b-4"), round, snapshots)
            .await
            .unwrap();

        let read = store
            .read_snapshots_for_node_round(&node, 4)
            .await
            .unwrap();
        let timestamps: Vec<u64> = read.iter().map(|s| s.timestamp).collect();
        assert_eq!(timestamps, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn unknown_node_round_has_no_snapshots() {
        let store = MemoryRoundStore::new();
        let node = NodeIdentity::digest(b"node-c");
        let read = store
            .read_snapshots_for_node_round(&node, 9)
            .await
            .unwrap();
        assert!(read.is_empty());
    }
}
