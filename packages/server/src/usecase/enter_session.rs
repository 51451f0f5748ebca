//! UseCase: セッション入室処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - EnterSessionUseCase::execute() メソッド
//! - 入室後にルームの参加者一覧と現在のマッチがルーム全員に通知されること
//!
//! ### どのような状況を想定しているか
//! - 正常系：空のルームへの最初の入室、既存ルームへの入室
//! - エッジケース：同名での再入室（再接続）で選択が保持されること

use std::sync::Arc;

use crate::domain::{
    ConnectionId, MessagePusher, RoomName, SessionEvent, SessionRepository, SessionUser, UserName,
};

use super::{
    broadcast::{broadcast_to_room, room_targets},
    error::BroadcastError,
};

/// セッション入室のユースケース
pub struct EnterSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl EnterSessionUseCase {
    /// 新しい EnterSessionUseCase を作成
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 入室を実行
    ///
    /// # Returns
    ///
    /// * `Ok(SessionUser)` - 追加（または再接続で付け替え）された参加者
    /// * `Err(BroadcastError)` - ルームへの通知に失敗
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        name: UserName,
        room: RoomName,
    ) -> Result<SessionUser, BroadcastError> {
        // 1. レジストリに追加（同名なら再接続）し、同じ時点のルームの状態を得る
        let (user, snapshot) = self.repository.add_user(connection_id, name, room).await;
        let targets = room_targets(&snapshot.users);

        // 2. ルーム全員に参加者一覧とマッチを通知
        broadcast_to_room(
            self.message_pusher.as_ref(),
            &user.room,
            targets.clone(),
            &SessionEvent::SessionUsers(snapshot.users),
        )
        .await?;
        broadcast_to_room(
            self.message_pusher.as_ref(),
            &user.room,
            targets,
            &SessionEvent::Matches(snapshot.matches),
        )
        .await?;

        Ok(user)
    }
}
