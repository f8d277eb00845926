use super::entity::MovieEntry;
use crate::domain::{DomainError, DomainResult};

/// Trim user input into a title.
/// Returns `None` when nothing but whitespace was typed.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validates all MovieEntry invariants
pub fn validate_movie(movie: &MovieEntry) -> DomainResult<()> {
    validate_title(movie.title())?;
    validate_id(movie)?;
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    if title.trim() != title {
        return Err(DomainError::InvariantViolation(format!(
            "Movie title '{}' has surrounding whitespace",
            title
        )));
    }
    Ok(())
}

fn validate_id(movie: &MovieEntry) -> DomainResult<()> {
    if movie.id().as_str().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Movie '{}' has an empty id",
            movie.title()
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Identity is immutable
/// 2. Title is trimmed and never empty
/// 3. Title never changes after creation
/// 4. A new entry starts unwatched
