//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::Show,
    infrastructure::dto::http::{RoomDetailDto, RoomSummaryDto, ShuffleRequest, ShuffleResponse},
    ui::state::AppState,
    usecase::GetRoomDetailError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Shuffle the episodes of the given shows into one playback order
///
/// Runs on the blocking pool so a large request does not stall the async workers.
pub async fn shuffle_playlist(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ShuffleRequest>,
) -> Result<Json<ShuffleResponse>, StatusCode> {
    // DTO から Domain Model への変換
    let shows: Vec<Show> = request.shows.into_iter().map(Show::from).collect();
    let show_count = shows.len();

    let usecase = state.shuffle_playlist_usecase.clone();
    let episodes = tokio::task::spawn_blocking(move || usecase.execute(&shows))
        .await
        .map_err(|e| {
            tracing::error!("Shuffle task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    tracing::info!(
        "Shuffled playlist of {} episodes from {} shows",
        episodes.len(),
        show_count
    );

    Ok(Json(ShuffleResponse {
        total: episodes.len(),
        episodes,
    }))
}

/// Get list of active rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(rooms.iter().map(RoomSummaryDto::from).collect())
}

/// Get room detail by name
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    match state.get_room_detail_usecase.execute(room).await {
        Ok(snapshot) => Ok(Json(RoomDetailDto::from(&snapshot))),
        Err(GetRoomDetailError::RoomNotFound(room)) => {
            tracing::debug!("Room '{}' not found", room);
            Err(StatusCode::NOT_FOUND)
        }
        Err(GetRoomDetailError::InvalidRoom(reason)) => {
            tracing::debug!("Invalid room name: {}", reason);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
