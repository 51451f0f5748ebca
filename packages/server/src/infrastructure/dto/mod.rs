//! Data Transfer Objects (DTOs).
//!
//! DTOs are organized by protocol:
//! - `websocket`: match-session events
//! - `http`: HTTP API requests and responses

pub mod conversion;
pub mod http;
pub mod websocket;
