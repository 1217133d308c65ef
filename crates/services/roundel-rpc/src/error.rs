use std::fmt;

use thiserror::Error;

use roundel_core_types::{IdentifierError, NodeIdentity, RoundHash};
use roundel_types::{StorageError, Timestamp};

/// Errors surfaced by the round query operations.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Wrong argument count; caller error, never retried.
    #[error("invalid params count: expected {expected}, got {actual}")]
    InvalidParams { expected: usize, actual: usize },
    /// Unparseable node identity or round hash.
    #[error("malformed identifier: {0}")]
    MalformedIdentifier(#[from] IdentifierError),
    /// Round number that is not a non-negative 64-bit integer.
    #[error("malformed round number: {0}")]
    MalformedNumber(String),
    /// Persistence failure or not-found, surfaced verbatim.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The integrity invariant failed: the recomputed hash or fields
    /// disagree with the persisted record. Storage corruption or a
    /// consensus bug; never auto-corrected.
    #[error("round malformed: expected {expected}, got {actual}")]
    RoundMalformed {
        expected: RoundFacts,
        actual: RoundFacts,
    },
    /// Unknown query method name.
    #[error("method not found: {0}")]
    MethodNotFound(String),
    /// Result could not be shaped into a transport value.
    #[error("internal error: {0}")]
    Internal(String),
}

/// One side of a round integrity diagnostic: the identifying fields of a
/// round as expected from the query input, or as actually persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundFacts {
    pub node: NodeIdentity,
    pub number: u64,
    pub timestamp: Timestamp,
    pub hash: RoundHash,
}

impl fmt::Display for RoundFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.node, self.number, self.timestamp, self.hash
        )
    }
}
