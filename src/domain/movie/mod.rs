pub mod entity;
pub mod invariants;

pub use entity::{MovieEntry, MovieId, WatchStatus};
pub use invariants::{normalize_title, validate_movie};
