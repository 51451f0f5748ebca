//! UseCase: 選択追加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AddChoiceUseCase::execute() メソッド
//! - 選択追加後にルームの現在のマッチが全員に通知されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：全員が選んだタイトルがマッチになる
//! - 異常系：ルームにいないコネクションからの選択（通知しない）
//! - エッジケース：同じ選択の重複追加

use std::sync::Arc;

use crate::domain::{
    ConnectionId, MessagePusher, RoomName, SessionEvent, SessionRepository, TitleId,
};

use super::{
    broadcast::{broadcast_to_room, room_targets},
    error::AddChoiceError,
};

/// 選択追加のユースケース
pub struct AddChoiceUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl AddChoiceUseCase {
    /// 新しい AddChoiceUseCase を作成
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 選択追加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<TitleId>)` - 追加後のルームのマッチ
    /// * `Err(AddChoiceError::UserNotInRoom)` - コネクションがそのルームにいない（通知なし）
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        room: &RoomName,
        title_id: TitleId,
    ) -> Result<Vec<TitleId>, AddChoiceError> {
        // 1. 選択を追加（ルームにいなければ何もしない）
        let Some(snapshot) = self
            .repository
            .add_choice(connection_id, room, title_id)
            .await
        else {
            return Err(AddChoiceError::UserNotInRoom {
                connection_id: connection_id.to_string(),
                room: room.to_string(),
            });
        };

        // 2. 追加と同じ時点のマッチをルーム全員に通知
        broadcast_to_room(
            self.message_pusher.as_ref(),
            room,
            room_targets(&snapshot.users),
            &SessionEvent::Matches(snapshot.matches.clone()),
        )
        .await?;

        Ok(snapshot.matches)
    }
}
