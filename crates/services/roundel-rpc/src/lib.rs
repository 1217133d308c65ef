//! Round query and integrity-verification layer.
//!
//! Two query operations sit on top of the round store and the kernel's
//! round hash: lookup by `(node, number)` and lookup by content hash.
//! Both recompute the round hash from the persisted snapshot set and
//! cross-check it against the persisted round record before anything is
//! returned, so a stored round can never silently drift from what its
//! contents imply.

pub mod error;
pub mod params;
pub mod round;
pub mod views;

pub use error::{QueryError, RoundFacts};
pub use round::{get_round_by_hash, get_round_by_number};
pub use views::{snapshot_views, RoundView, SnapshotView};

use serde_json::Value;

use roundel_types::RoundStore;

/// Dispatch a named query operation over untyped parameters, returning
/// the transport-level result value.
pub async fn dispatch(
    store: &dyn RoundStore,
    method: &str,
    params: &[Value],
) -> Result<Value, QueryError> {
    let view = match method {
        "getroundbynumber" => get_round_by_number(store, params).await?,
        "getroundbyhash" => get_round_by_hash(store, params).await?,
        other => return Err(QueryError::MethodNotFound(other.to_string())),
    };
    serde_json::to_value(view).map_err(|e| QueryError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_method_is_rejected() {
        let store = roundel_types::MemoryRoundStore::new();
        let err = dispatch(&store, "getsnapshot", &[]).await.unwrap_err();
        assert!(matches!(err, QueryError::MethodNotFound(name) if name == "getsnapshot"));
    }
}
