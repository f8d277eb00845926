//! Critical Watchlist Invariants:
//!
//! 1. Order is insertion order; entries are only appended or removed
//! 2. Ids are unique within the list
//! 3. Every entry satisfies the Movie invariants
//! 4. The persisted snapshot is derived data, never a second owner

pub mod entity;
pub mod snapshot;

pub use entity::Watchlist;
pub use snapshot::{decode_snapshot, encode_snapshot};
