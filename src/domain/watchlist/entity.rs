use std::collections::HashSet;

use crate::domain::movie::{normalize_title, validate_movie, MovieEntry, MovieId};
use crate::domain::statistics::WatchProgress;
use crate::domain::DomainError;

/// The ordered collection of movie entries.
///
/// This is the single owner of the entries. Every mutation reports whether it
/// had an effect so the caller knows when a new snapshot is due.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    entries: Vec<MovieEntry>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from restored entries.
    ///
    /// Titles are trimmed the same way user input is. Entries that still break
    /// an invariant are dropped and reported; the rest keep their relative
    /// order.
    pub fn restore(entries: Vec<MovieEntry>) -> (Self, Vec<DomainError>) {
        let mut seen: HashSet<MovieId> = HashSet::with_capacity(entries.len());
        let mut kept = Vec::with_capacity(entries.len());
        let mut rejected = Vec::new();

        for mut entry in entries {
            entry.trim_title();
            if let Err(e) = validate_movie(&entry) {
                rejected.push(e);
                continue;
            }
            if !seen.insert(entry.id().clone()) {
                rejected.push(DomainError::DuplicateId(entry.id().clone()));
                continue;
            }
            kept.push(entry);
        }

        (Self { entries: kept }, rejected)
    }

    pub fn entries(&self) -> &[MovieEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &MovieId) -> Option<&MovieEntry> {
        self.entries.iter().find(|m| m.id() == id)
    }

    pub fn contains(&self, id: &MovieId) -> bool {
        self.get(id).is_some()
    }

    /// Append a new entry built from raw user input.
    /// Whitespace-only input is ignored and returns `None`.
    pub fn add(&mut self, raw_title: &str) -> Option<&MovieEntry> {
        let title = normalize_title(raw_title)?;

        let mut id = MovieId::generate();
        while self.contains(&id) {
            id = MovieId::generate();
        }

        self.entries.push(MovieEntry::with_id(id, title));
        self.entries.last()
    }

    /// Flip the watched flag of one entry in place.
    /// Returns the new flag, or `None` if no entry has this id.
    pub fn toggle_watched(&mut self, id: &MovieId) -> Option<bool> {
        self.entries
            .iter_mut()
            .find(|m| m.id() == id)
            .map(MovieEntry::toggle_watched)
    }

    /// Remove one entry, preserving the order of the others
    pub fn remove(&mut self, id: &MovieId) -> Option<MovieEntry> {
        let index = self.entries.iter().position(|m| m.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Drop every entry, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn progress(&self) -> WatchProgress {
        WatchProgress::from_entries(&self.entries)
    }
}
