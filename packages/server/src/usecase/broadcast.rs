//! ルームへのブロードキャスト補助

use crate::domain::{ConnectionId, MessagePusher, RoomName, SessionEvent, SessionUser};

use super::error::BroadcastError;

/// ルームの参加者のコネクション ID（参加順）
pub(super) fn room_targets(members: &[SessionUser]) -> Vec<ConnectionId> {
    members
        .iter()
        .map(|member| member.connection_id.clone())
        .collect()
}

/// イベントをルームの参加者に送信
pub(super) async fn broadcast_to_room(
    message_pusher: &dyn MessagePusher,
    room: &RoomName,
    targets: Vec<ConnectionId>,
    event: &SessionEvent,
) -> Result<(), BroadcastError> {
    message_pusher
        .broadcast(targets, event)
        .await
        .map_err(|e| BroadcastError {
            room: room.as_str().to_string(),
            reason: e.to_string(),
        })
}
