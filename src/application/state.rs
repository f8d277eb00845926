// src/application/state.rs

use std::sync::{Arc, Mutex, PoisonError};

use crate::events::EventBus;
use crate::services::WatchlistService;

/// Application state owned by the host.
/// Services are initialized in main.rs and passed here.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub watchlist_service: Arc<WatchlistService>,

    /// Text currently typed in the add field
    draft: Mutex<String>,
}

impl AppState {
    pub fn new(event_bus: Arc<EventBus>, watchlist_service: Arc<WatchlistService>) -> Self {
        Self {
            event_bus,
            watchlist_service,
            draft: Mutex::new(String::new()),
        }
    }

    pub fn draft(&self) -> String {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        *self.draft.lock().unwrap_or_else(PoisonError::into_inner) = text.into();
    }

    pub fn take_draft(&self) -> String {
        std::mem::take(&mut *self.draft.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
