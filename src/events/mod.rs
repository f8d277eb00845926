// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventLogEntry};
pub use types::{
    DomainEvent, MovieAdded, MovieRemoved, MovieWatchedToggled, WatchlistCleared,
    WatchlistLoaded,
};
