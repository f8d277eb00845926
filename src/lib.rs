// src/lib.rs
// Movie Watchlist - Local-first personal movie watch-list
//
// Architecture:
// - Domain-centric: list rules live in the domain
// - Event-driven: the service announces changes, the host listens
// - Local-first: one key-value slot in a local SQLite file
// - Application Layer: host boundary (commands, DTOs, terminal)

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    decode_snapshot, encode_snapshot, normalize_title, validate_movie, DomainError, MovieEntry,
    MovieId, WatchProgress, WatchStatus, Watchlist,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::{WatchlistConfig, MOVIE_LIST_KEY};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DomainEvent, EventBus, EventLogEntry, MovieAdded, MovieRemoved, MovieWatchedToggled,
    WatchlistCleared, WatchlistLoaded,
};

// ============================================================================
// PUBLIC API - Persistence
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use repositories::{KeyValueRepository, SqliteKeyValueRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{SnapshotWriter, WatchlistService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, TerminalHost};
pub use application::commands;
pub use application::dto;
