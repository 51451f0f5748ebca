//! MessagePusher trait 定義
//!
//! ルームの参加者へのイベント通知を抽象化します。
//! WebSocket などの具体的な送信手段は Infrastructure 層が実装します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, SessionEvent};

/// コネクションへの送信チャンネル（シリアライズ済みメッセージ）
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// コネクションの送信チャンネルを登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// コネクションの登録を解除
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 特定のコネクションにイベントを送信
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &SessionEvent,
    ) -> Result<(), MessagePushError>;

    /// 複数のコネクションにイベントを送信（一部の失敗は許容）
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &SessionEvent,
    ) -> Result<(), MessagePushError>;
}
