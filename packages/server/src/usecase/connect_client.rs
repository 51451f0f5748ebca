//! UseCase: コネクション接続処理
//!
//! WebSocket の接続ごとにコネクション ID を払い出し、送信チャンネルを
//! MessagePusher に登録します。ルームへの参加は `EnterSessionUseCase` が別途行います。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, SessionEvent};

/// コネクション接続のユースケース
pub struct ConnectClientUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectClientUseCase {
    /// 新しい ConnectClientUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 接続を登録し、払い出したコネクション ID を返す
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionId::generate();
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;
        connection_id
    }

    /// 受け付けなかったイベントの理由を送信元のコネクションにだけ返す
    pub async fn send_error(
        &self,
        connection_id: &ConnectionId,
        reason: String,
    ) -> Result<(), MessagePushError> {
        self.message_pusher
            .push_to(connection_id, &SessionEvent::Rejected(reason))
            .await
    }
}
