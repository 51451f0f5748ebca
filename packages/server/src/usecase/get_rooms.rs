//! UseCase: ルーム一覧取得

use std::sync::Arc;

use crate::domain::{RoomSnapshot, SessionRepository};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    repository: Arc<dyn SessionRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// 参加者のいる全ルームのスナップショット（最初に現れた順、全ルーム同一時点）
    pub async fn execute(&self) -> Vec<RoomSnapshot> {
        self.repository.get_rooms().await
    }
}
