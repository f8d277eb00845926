// src/services/watchlist_service.rs
//
// Watchlist Service - the list store
//
// CRITICAL RULES:
// - The in-memory list is authoritative for the running session
// - Every effective mutation hands a full snapshot to the writer
// - Storage failures are logged and swallowed, never rolled back
// - No-op operations persist nothing and emit nothing

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{decode_snapshot, encode_snapshot, MovieEntry, MovieId, WatchProgress, Watchlist};
use crate::events::{
    EventBus, MovieAdded, MovieRemoved, MovieWatchedToggled, WatchlistCleared, WatchlistLoaded,
};
use crate::repositories::KeyValueRepository;
use crate::services::SnapshotWriter;

pub struct WatchlistService {
    watchlist: Mutex<Watchlist>,
    repository: Arc<dyn KeyValueRepository>,
    writer: SnapshotWriter,
    event_bus: Arc<EventBus>,
    storage_key: String,
}

impl WatchlistService {
    /// Must be called from within a Tokio runtime (starts the snapshot writer).
    pub fn new(
        repository: Arc<dyn KeyValueRepository>,
        event_bus: Arc<EventBus>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let writer = SnapshotWriter::spawn(Arc::clone(&repository), storage_key.clone());

        Self {
            watchlist: Mutex::new(Watchlist::new()),
            repository,
            writer,
            event_bus,
            storage_key,
        }
    }

    /// Read the persisted snapshot and replace the in-memory list with it.
    ///
    /// Missing, blank, unreadable or unparsable snapshots all yield an empty
    /// list. Returns the number of restored entries.
    pub async fn load(&self) -> usize {
        let repo = Arc::clone(&self.repository);
        let key = self.storage_key.clone();

        let raw = match tokio::task::spawn_blocking(move || repo.get(&key)).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                log::error!("Failed to read watch-list from '{}': {}", self.storage_key, e);
                None
            }
            Err(e) => {
                log::error!("Watch-list read did not complete: {}", e);
                None
            }
        };

        let restored = match raw.as_deref().map(str::trim) {
            None | Some("") => Watchlist::new(),
            Some(raw) => match decode_snapshot(raw) {
                Ok(entries) => {
                    let (list, rejected) = Watchlist::restore(entries);
                    for reason in rejected {
                        log::warn!("Skipping stored movie: {}", reason);
                    }
                    list
                }
                Err(e) => {
                    log::warn!("Stored watch-list is not valid JSON, starting empty: {}", e);
                    Watchlist::new()
                }
            },
        };

        let count = restored.len();
        *self.lock() = restored;

        log::info!("Loaded {} movies from '{}'", count, self.storage_key);
        self.event_bus.emit(WatchlistLoaded::new(count));
        count
    }

    /// Add a movie from raw input. Blank input is ignored.
    pub fn add(&self, raw_title: &str) -> Option<MovieEntry> {
        let movie = {
            let mut list = self.lock();
            let movie = list.add(raw_title)?.clone();
            self.persist(&list);
            movie
        };

        self.event_bus
            .emit(MovieAdded::new(movie.id().clone(), movie.title().to_string()));
        Some(movie)
    }

    /// Flip the watched flag. Returns the new value, `None` for unknown ids.
    pub fn toggle_watched(&self, id: &MovieId) -> Option<bool> {
        let (watched, title) = {
            let mut list = self.lock();
            let watched = list.toggle_watched(id)?;
            self.persist(&list);
            let title = list.get(id).map(|m| m.title().to_string()).unwrap_or_default();
            (watched, title)
        };

        self.event_bus
            .emit(MovieWatchedToggled::new(id.clone(), title, watched));
        Some(watched)
    }

    pub fn remove(&self, id: &MovieId) -> Option<MovieEntry> {
        let removed = {
            let mut list = self.lock();
            let removed = list.remove(id)?;
            self.persist(&list);
            removed
        };

        self.event_bus
            .emit(MovieRemoved::new(removed.id().clone(), removed.title().to_string()));
        Some(removed)
    }

    /// Drop every movie. Always persists, even when the list was empty.
    pub fn clear(&self) -> usize {
        let removed = {
            let mut list = self.lock();
            let removed = list.clear();
            self.persist(&list);
            removed
        };

        self.event_bus.emit(WatchlistCleared::new(removed));
        removed
    }

    pub fn entries(&self) -> Vec<MovieEntry> {
        self.lock().entries().to_vec()
    }

    pub fn get(&self, id: &MovieId) -> Option<MovieEntry> {
        self.lock().get(id).cloned()
    }

    pub fn progress(&self) -> WatchProgress {
        self.lock().progress()
    }

    /// Wait for every snapshot issued so far to reach storage (or fail)
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    // Called with the list locked so snapshots reach the writer in mutation order
    fn persist(&self, list: &Watchlist) {
        match encode_snapshot(list.entries()) {
            Ok(payload) => {
                self.writer.submit(payload);
            }
            Err(e) => log::error!("Failed to encode watch-list: {}", e),
        }
    }

    // A panic mid-mutation cannot leave the list half-updated, so a poisoned
    // lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Watchlist> {
        self.watchlist.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
