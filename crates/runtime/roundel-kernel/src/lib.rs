use sha2::{Digest, Sha256};

use roundel_core_types::{NodeIdentity, RoundHash};
use roundel_types::{Snapshot, Timestamp};

/// Deterministically fold a round's snapshot set into its canonical
/// `(start, end, hash)` tuple.
///
/// The digest is seeded with `"node_hex:number"` and folded left with
/// each snapshot's payload digest, so it is order-sensitive: callers
/// must pass snapshots in the round-internal canonical order (ascending
/// timestamp), which is the order the store contract guarantees.
///
/// `start` and `end` are the first and last snapshot timestamps. An
/// empty snapshot set yields `(0, 0, seed)`; no round is ever persisted
/// under that hash, so the subsequent by-hash lookup fails not-found.
pub fn compute_round_hash(
    node: &NodeIdentity,
    number: u64,
    snapshots: &[Snapshot],
) -> (Timestamp, Timestamp, RoundHash) {
    let seed = format!("{}:{}", node, number);
    let mut hash = sha256(seed.as_bytes());
    for snapshot in snapshots {
        let mut hasher = Sha256::new();
        hasher.update(hash);
        hasher.update(snapshot.payload_hash());
        hash.copy_from_slice(&hasher.finalize());
    }

    let start = snapshots.first().map(|s| s.timestamp).unwrap_or(0);
    let end = snapshots.last().map(|s| s.timestamp).unwrap_or(0);
    (start, end, RoundHash::from(hash))
}

fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let mut array = [0u8; 32];
    array.copy_from_slice(&hasher.finalize());
    array
}
