//! Critical Statistics Invariants:
//!
//! 1. Statistics are ALWAYS derived, NEVER primary
//! 2. Statistics are recalculated on demand, never cached
//! 3. Statistics NEVER alter domain state

pub mod entity;
pub use entity::WatchProgress;
