pub mod memory;
pub mod round;
pub mod snapshot;
pub mod store;

pub use memory::MemoryRoundStore;
pub use round::Round;
pub use snapshot::{Snapshot, TransactionId};
pub use store::{RoundStore, StorageError};

/// Nanoseconds since the Unix epoch.
pub type Timestamp = u64;
