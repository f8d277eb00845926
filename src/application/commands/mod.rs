// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the host and services
// - Commands accept plain values, return DTOs
// - Commands NEVER contain business logic

pub mod watchlist_commands;

pub use watchlist_commands::*;
