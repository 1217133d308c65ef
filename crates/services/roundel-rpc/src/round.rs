use serde_json::Value;
use tracing::debug;

use roundel_core_types::{NodeIdentity, RoundHash};
use roundel_kernel::compute_round_hash;
use roundel_types::{Round, RoundStore, Snapshot, Timestamp};

use crate::error::{QueryError, RoundFacts};
use crate::params::{expect_arity, param_text, parse_round_number};
use crate::views::{snapshot_views, RoundView};

/// Look up a round by `(node identity, round number)` and verify it
/// against its own contents before returning it.
///
/// Expects exactly two textual parameters: the node identity and the
/// round number. The round hash is recomputed from the stored snapshot
/// set, the round is fetched by that hash, and the fetched record's
/// identifying fields must match the query input exactly.
pub async fn get_round_by_number(
    store: &dyn RoundStore,
    params: &[Value],
) -> Result<RoundView, QueryError> {
    expect_arity(params, 2)?;
    let node: NodeIdentity = param_text(&params[0]).parse()?;
    let number = parse_round_number(&param_text(&params[1]))?;
    debug!(node = %node, number, "round query by number");

    let snapshots = store.read_snapshots_for_node_round(&node, number).await?;
    let (start, end, hash) = compute_round_hash(&node, number, &snapshots);
    let round = store.read_round(&hash).await?;
    if round.node_id != node || round.number != number || round.timestamp != start {
        return Err(QueryError::RoundMalformed {
            expected: RoundFacts {
                node,
                number,
                timestamp: start,
                hash,
            },
            actual: RoundFacts {
                node: round.node_id,
                number: round.number,
                timestamp: round.timestamp,
                hash,
            },
        });
    }

    Ok(round_view(node, number, hash, start, end, &round, &snapshots))
}

/// Look up a round by its content hash and verify that the hash is
/// re-derivable from the stored snapshot set.
///
/// Expects exactly one textual parameter: the round hash. The fetched
/// record names the owning node and number; the hash recomputed from
/// their snapshots must equal the input hash.
pub async fn get_round_by_hash(
    store: &dyn RoundStore,
    params: &[Value],
) -> Result<RoundView, QueryError> {
    expect_arity(params, 1)?;
    let hash: RoundHash = param_text(&params[0]).parse()?;
    debug!(hash = %hash, "round query by hash");

    let round = store.read_round(&hash).await?;
    let snapshots = store
        .read_snapshots_for_node_round(&round.node_id, round.number)
        .await?;
    let (start, end, computed) = compute_round_hash(&round.node_id, round.number, &snapshots);
    if computed != hash || round.timestamp != start {
        // expected: the persisted claim, including the lookup hash;
        // actual: what the snapshot set implies.
        return Err(QueryError::RoundMalformed {
            expected: RoundFacts {
                node: round.node_id,
                number: round.number,
                timestamp: round.timestamp,
                hash,
            },
            actual: RoundFacts {
                node: round.node_id,
                number: round.number,
                timestamp: start,
                hash: computed,
            },
        });
    }

    Ok(round_view(
        round.node_id,
        round.number,
        hash,
        start,
        end,
        &round,
        &snapshots,
    ))
}

// Both flows converge here: a verified round is re-shaped into the
// caller-facing record, signatures excluded.
fn round_view(
    node: NodeIdentity,
    number: u64,
    hash: RoundHash,
    start: Timestamp,
    end: Timestamp,
    round: &Round,
    snapshots: &[Snapshot],
) -> RoundView {
    RoundView {
        node,
        hash,
        start,
        end,
        number,
        references: round.references.clone(),
        snapshots: snapshot_views(snapshots, false),
    }
}
