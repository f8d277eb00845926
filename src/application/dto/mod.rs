// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: String,
    pub title: String,
    pub watched: bool,
    pub status: String,
}

// ============================================================================
// WATCHLIST DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchProgressDto {
    pub watched: usize,
    pub total: usize,
    pub label: String,
}

/// Everything the single screen needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistViewDto {
    pub movies: Vec<MovieDto>,
    pub progress: WatchProgressDto,
    pub is_empty: bool,
    pub can_clear: bool,
    pub draft: String,
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<crate::domain::MovieEntry> for MovieDto {
    fn from(movie: crate::domain::MovieEntry) -> Self {
        Self {
            id: movie.id().to_string(),
            title: movie.title().to_string(),
            watched: movie.is_watched(),
            status: movie.status().to_string(),
        }
    }
}

impl From<crate::domain::WatchProgress> for WatchProgressDto {
    fn from(progress: crate::domain::WatchProgress) -> Self {
        Self {
            watched: progress.watched,
            total: progress.total,
            label: progress.to_string(),
        }
    }
}
