//! HTTP API DTOs.

use serde::{Deserialize, Serialize};

/// Request body of `POST /api/shuffle`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuffleRequest {
    pub shows: Vec<ShowDto>,
}

/// A show and its episodes in airing order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowDto {
    /// Show rating key; `ratingKey` is accepted for compatibility with Plex payloads
    #[serde(alias = "ratingKey")]
    pub id: String,
    #[serde(default)]
    pub episodes: Vec<String>,
}

/// Response body of `POST /api/shuffle`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuffleResponse {
    pub total: usize,
    /// Episode rating keys in playback order
    pub episodes: Vec<String>,
}

/// Room summary for `GET /api/rooms`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub room: String,
    /// Member names in join order
    pub users: Vec<String>,
    pub matches: Vec<String>,
}

/// Room detail for `GET /api/rooms/{room}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub room: String,
    pub users: Vec<UserDetailDto>,
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetailDto {
    pub name: String,
    pub is_first: bool,
    pub choices: Vec<String>,
    /// RFC 3339 (UTC)
    pub joined_at: String,
}
