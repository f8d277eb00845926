// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the host (terminal) and the services
// - Translates domain entities into DTOs
// - Owns the screen state that is not domain data (the draft)

pub mod commands;
pub mod dto;
pub mod host;
pub mod render;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use host::{parse_gesture, Gesture, TerminalHost};
pub use render::render_view;
pub use state::AppState;
