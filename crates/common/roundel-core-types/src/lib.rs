pub mod codec;
pub mod hash;
pub mod identity;

pub use codec::{parse_node_identity, parse_round_hash, IdentifierError};
pub use hash::RoundHash;
pub use identity::NodeIdentity;
