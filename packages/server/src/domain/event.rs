//! ルームへ通知するイベント
//!
//! UseCase 層はこのイベントを `MessagePusher` に渡し、ワイヤ形式への
//! 変換は Infrastructure 層が担当します。

use super::{entity::SessionUser, value_object::TitleId};

/// ルームの参加者に通知するイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// ルームの参加者一覧（参加順）
    SessionUsers(Vec<SessionUser>),
    /// 現在のマッチ
    Matches(Vec<TitleId>),
    /// 参加者の誰かがフィルタを変更した
    FilterChanged(FilterChange),
    /// 送信元のイベントを受け付けなかった（送信元にのみ通知）
    Rejected(String),
}

/// マッチ画面のフィルタ変更
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    /// メディア種別（movie / show など）
    MediaType(String),
    Genre(String),
    SortBy(String),
}
