// src/main.rs

use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use movie_watchlist::application::{AppState, TerminalHost};
use movie_watchlist::config::WatchlistConfig;
use movie_watchlist::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
};
use movie_watchlist::events::EventBus;
use movie_watchlist::repositories::{KeyValueRepository, SqliteKeyValueRepository};
use movie_watchlist::services::WatchlistService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout belongs to the screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 1. INFRASTRUCTURE
    let config = WatchlistConfig::resolve()?;
    let pool = Arc::new(create_connection_pool(&config)?);
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;
    }
    log::info!("Using database at {}", config.database_path.display());

    let event_bus = Arc::new(EventBus::new());

    // 2. REPOSITORIES
    let kv_repo: Arc<dyn KeyValueRepository> = Arc::new(SqliteKeyValueRepository::new(pool));

    // 3. SERVICES
    let watchlist_service = Arc::new(WatchlistService::new(
        kv_repo,
        event_bus.clone(),
        config.storage_key.clone(),
    ));
    watchlist_service.load().await;

    // 4. APPLICATION STATE + HOST
    let app_state = AppState::new(event_bus, watchlist_service);
    TerminalHost::new(app_state)
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    Ok(())
}
