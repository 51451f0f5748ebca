//! Plex Shuffler server library.
//!
//! Provides the episode shuffle engine and the in-memory match-session
//! registry, together with the Axum/WebSocket adapters that expose them.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
