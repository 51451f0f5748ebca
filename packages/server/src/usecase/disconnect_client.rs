//! UseCase: コネクション切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectClientUseCase::execute() メソッド
//! - 参加者の削除、MessagePusher からの登録解除、残りの参加者への一覧通知
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の切断と残りの参加者への通知
//! - エッジケース：最後の参加者の切断（通知対象なし）
//! - エッジケース：入室前のコネクション、再接続で付け替え済みの古いコネクション

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, SessionEvent, SessionRepository, SessionUser};

use super::{
    broadcast::{broadcast_to_room, room_targets},
    error::BroadcastError,
};

/// コネクション切断のユースケース
pub struct DisconnectClientUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    /// 新しい DisconnectClientUseCase を作成
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Some(SessionUser))` - ルームから削除された参加者
    /// * `Ok(None)` - このコネクションに対応する参加者がいなかった
    /// * `Err(BroadcastError)` - 残りの参加者への通知に失敗（削除は完了している）
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Option<SessionUser>, BroadcastError> {
        // 1. レジストリから削除し、送信チャンネルの登録を解除
        let removed = self.repository.remove_user(connection_id).await;
        self.message_pusher.unregister_client(connection_id).await;

        let Some((user, snapshot)) = removed else {
            return Ok(None);
        };

        // 2. 残りの参加者に一覧を通知
        if !snapshot.users.is_empty() {
            broadcast_to_room(
                self.message_pusher.as_ref(),
                &user.room,
                room_targets(&snapshot.users),
                &SessionEvent::SessionUsers(snapshot.users),
            )
            .await?;
        }

        Ok(Some(user))
    }
}
