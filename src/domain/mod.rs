// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod movie;
pub mod statistics;
pub mod watchlist;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{normalize_title, validate_movie, MovieEntry, MovieId, WatchStatus};

// Watchlist Domain (ordered collection + snapshot codec)
pub use watchlist::{decode_snapshot, encode_snapshot, Watchlist};

// Statistics Domain (Derived Data)
pub use statistics::WatchProgress;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Duplicate movie id: {0}")]
    DuplicateId(MovieId),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
