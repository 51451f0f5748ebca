//! UseCase: フィルタ変更の中継
//!
//! 参加者の誰かがマッチ画面のフィルタ（種別・ジャンル・並び順）を変更したとき、
//! 同じルームの全員（変更した本人を含む）に変更内容を中継します。
//! レジストリの状態は変更しません。

use std::sync::Arc;

use crate::domain::{FilterChange, MessagePusher, RoomName, SessionEvent, SessionRepository};

use super::{
    broadcast::{broadcast_to_room, room_targets},
    error::BroadcastError,
};

/// フィルタ変更中継のユースケース
pub struct RelayFilterUseCase {
    repository: Arc<dyn SessionRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelayFilterUseCase {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 変更をルームに中継し、通知した参加者数を返す
    pub async fn execute(
        &self,
        room: &RoomName,
        change: FilterChange,
    ) -> Result<usize, BroadcastError> {
        let snapshot = self.repository.get_room(room).await;
        let targets = room_targets(&snapshot.users);
        let count = targets.len();

        broadcast_to_room(
            self.message_pusher.as_ref(),
            room,
            targets,
            &SessionEvent::FilterChanged(change),
        )
        .await?;

        Ok(count)
    }
}
