//! Utilities shared by the Plex Shuffler server and client.

pub mod logger;
pub mod time;
