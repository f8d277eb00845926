// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::MovieId;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// WATCHLIST EVENTS
// ============================================================================

/// Emitted once the persisted snapshot has been read at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub count: usize,
}

impl WatchlistLoaded {
    pub fn new(count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            count,
        }
    }
}

impl DomainEvent for WatchlistLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "WatchlistLoaded" }
}

/// Emitted when every entry was dropped at once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub removed: usize,
}

impl WatchlistCleared {
    pub fn new(removed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            removed,
        }
    }
}

impl DomainEvent for WatchlistCleared {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "WatchlistCleared" }
}

// ============================================================================
// MOVIE EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: MovieId,
    pub title: String,
}

impl MovieAdded {
    pub fn new(movie_id: MovieId, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            title,
        }
    }
}

impl DomainEvent for MovieAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MovieAdded" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieWatchedToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: MovieId,
    pub title: String,
    /// Flag value after the toggle
    pub watched: bool,
}

impl MovieWatchedToggled {
    pub fn new(movie_id: MovieId, title: String, watched: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            title,
            watched,
        }
    }
}

impl DomainEvent for MovieWatchedToggled {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MovieWatchedToggled" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: MovieId,
    pub title: String,
}

impl MovieRemoved {
    pub fn new(movie_id: MovieId, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            title,
        }
    }
}

impl DomainEvent for MovieRemoved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MovieRemoved" }
}
