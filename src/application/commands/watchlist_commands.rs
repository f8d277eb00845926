// src/application/commands/watchlist_commands.rs
//
// Watchlist Command Handlers
//
// RULES:
// - Call the watch-list service
// - Return DTOs
// - Never contain business logic

use crate::application::{dto::*, state::AppState};
use crate::domain::MovieId;

/// Full screen state: movies, progress and the current draft
pub fn get_watchlist_view(state: &AppState) -> WatchlistViewDto {
    let movies = list_movies(state);
    let progress = get_watch_progress(state);

    WatchlistViewDto {
        is_empty: movies.is_empty(),
        can_clear: !movies.is_empty(),
        movies,
        progress,
        draft: state.draft(),
    }
}

pub fn list_movies(state: &AppState) -> Vec<MovieDto> {
    state
        .watchlist_service
        .entries()
        .into_iter()
        .map(MovieDto::from)
        .collect()
}

pub fn get_watch_progress(state: &AppState) -> WatchProgressDto {
    WatchProgressDto::from(state.watchlist_service.progress())
}

/// Replace the text of the add field
pub fn update_draft(state: &AppState, text: String) {
    state.set_draft(text);
}

/// Add the drafted title.
/// The draft is cleared only when a movie was actually added.
pub fn submit_draft(state: &AppState) -> Option<MovieDto> {
    let draft = state.take_draft();
    match state.watchlist_service.add(&draft) {
        Some(movie) => Some(MovieDto::from(movie)),
        None => {
            state.set_draft(draft);
            None
        }
    }
}

pub fn add_movie(state: &AppState, title: String) -> Option<MovieDto> {
    state.watchlist_service.add(&title).map(MovieDto::from)
}

/// Toggle the watched flag, returning the updated movie
pub fn toggle_movie_watched(state: &AppState, movie_id: String) -> Option<MovieDto> {
    let id = MovieId::from(movie_id);
    state.watchlist_service.toggle_watched(&id)?;
    state.watchlist_service.get(&id).map(MovieDto::from)
}

pub fn remove_movie(state: &AppState, movie_id: String) -> Option<MovieDto> {
    state
        .watchlist_service
        .remove(&MovieId::from(movie_id))
        .map(MovieDto::from)
}

pub fn clear_movies(state: &AppState) -> usize {
    state.watchlist_service.clear()
}
