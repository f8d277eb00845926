// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod snapshot_writer;
pub mod watchlist_service;


pub use snapshot_writer::SnapshotWriter;
pub use watchlist_service::WatchlistService;
