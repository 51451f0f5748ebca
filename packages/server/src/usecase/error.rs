//! UseCase 層のエラー型

use thiserror::Error;

/// ルームへのブロードキャスト失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to broadcast to room '{room}': {reason}")]
pub struct BroadcastError {
    pub room: String,
    pub reason: String,
}

/// 選択追加のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddChoiceError {
    /// コネクションが指定ルームに参加していない（通知もしない）
    #[error("Connection '{connection_id}' is not in room '{room}'")]
    UserNotInRoom { connection_id: String, room: String },

    #[error(transparent)]
    Broadcast(#[from] BroadcastError),
}

/// ルーム詳細取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    /// ルーム名が不正
    #[error("Invalid room name: {0}")]
    InvalidRoom(String),

    /// 参加者のいないルーム
    #[error("Room '{0}' not found")]
    RoomNotFound(String),
}
