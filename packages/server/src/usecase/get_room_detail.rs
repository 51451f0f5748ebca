//! UseCase: ルーム詳細取得

use std::sync::Arc;

use crate::domain::{RoomName, RoomSnapshot, SessionRepository};

use super::error::GetRoomDetailError;

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// ルームの参加者とマッチを取得
    ///
    /// ルームは参加者がいる間だけ存在するため、参加者 0 人なら `RoomNotFound`。
    pub async fn execute(&self, room: String) -> Result<RoomSnapshot, GetRoomDetailError> {
        let room = RoomName::new(room).map_err(|e| GetRoomDetailError::InvalidRoom(e.to_string()))?;

        let snapshot = self.repository.get_room(&room).await;
        if snapshot.users.is_empty() {
            return Err(GetRoomDetailError::RoomNotFound(room.into_string()));
        }

        Ok(snapshot)
    }
}
