//! エンティティ

use super::value_object::{ConnectionId, RoomName, Timestamp, TitleId, UserName};

/// マッチセッションの参加者
///
/// `choices` は追加順を保持しますが、重複は持ちません（集合として扱う）。
/// `is_first` は作成時にルームが空だった場合のみ `true` になり、以後再計算されません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub connection_id: ConnectionId,
    pub name: UserName,
    pub room: RoomName,
    pub choices: Vec<TitleId>,
    pub is_first: bool,
    pub joined_at: Timestamp,
}

impl SessionUser {
    pub fn new(
        connection_id: ConnectionId,
        name: UserName,
        room: RoomName,
        is_first: bool,
        joined_at: Timestamp,
    ) -> Self {
        Self {
            connection_id,
            name,
            room,
            choices: Vec::new(),
            is_first,
            joined_at,
        }
    }

    /// 選択を追加。既に選択済みの場合は何もせず `false` を返す
    pub fn add_choice(&mut self, title_id: TitleId) -> bool {
        if self.has_chosen(&title_id) {
            return false;
        }
        self.choices.push(title_id);
        true
    }

    pub fn has_chosen(&self, title_id: &TitleId) -> bool {
        self.choices.contains(title_id)
    }
}

/// ある時点のルームの状態（参加者とマッチ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub room: RoomName,
    pub users: Vec<SessionUser>,
    pub matches: Vec<TitleId>,
}
