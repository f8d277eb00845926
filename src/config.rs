// src/config.rs
//
// Runtime configuration
//
// Everything here is resolved once at startup and passed down explicitly.

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Persistence slot holding the serialized watch-list
pub const MOVIE_LIST_KEY: &str = "@filmes";

const APP_DIR_NAME: &str = "movie-watchlist";
const DATABASE_FILE_NAME: &str = "watchlist.db";
const DEFAULT_POOL_SIZE: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistConfig {
    /// SQLite file backing the key-value store
    pub database_path: PathBuf,

    /// Key of the persistence slot
    pub storage_key: String,

    /// Maximum pooled connections
    pub pool_size: u32,
}

impl WatchlistConfig {
    /// Resolve the default configuration.
    ///
    /// Database is stored in the application data directory:
    /// {APP_DATA}/movie-watchlist/watchlist.db
    pub fn resolve() -> AppResult<Self> {
        let app_data_dir = dirs::data_dir()
            .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

        let app_dir = app_data_dir.join(APP_DIR_NAME);
        std::fs::create_dir_all(&app_dir)?;

        Ok(Self::at(app_dir.join(DATABASE_FILE_NAME)))
    }

    /// Configuration rooted at an explicit database file
    pub fn at(database_path: impl AsRef<Path>) -> Self {
        Self {
            database_path: database_path.as_ref().to_path_buf(),
            storage_key: MOVIE_LIST_KEY.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}
