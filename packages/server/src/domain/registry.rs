//! マッチセッションのレジストリ
//!
//! 全ルームの参加者を 1 つのリストで保持します。ルームは独立した構造を持たず、
//! `room` フィールドによるフィルタとしてのみ存在します（参加者が 0 人になれば消える）。
//!
//! 全ての操作は同期的で、ロックは呼び出し側（Repository）が 1 つの Mutex で
//! レジストリ全体を保護する前提です。

use super::{
    entity::{RoomSnapshot, SessionUser},
    value_object::{ConnectionId, RoomName, Timestamp, TitleId, UserName},
};

/// プロセス内の全セッション参加者
#[derive(Debug, Default)]
pub struct SessionRegistry {
    /// 参加順（ルームを跨いだ登録順）
    users: Vec<SessionUser>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 参加者をルームに追加する
    ///
    /// 同じルームに同じ名前の参加者がいる場合は新規作成せず、その参加者の
    /// コネクション ID を付け替えて返す（再接続）。選択と `is_first` は保持される。
    pub fn add_user(
        &mut self,
        connection_id: ConnectionId,
        name: UserName,
        room: RoomName,
        joined_at: Timestamp,
    ) -> SessionUser {
        if let Some(existing) = self
            .users
            .iter_mut()
            .find(|user| user.room == room && user.name == name)
        {
            existing.connection_id = connection_id;
            return existing.clone();
        }

        let is_first = !self.users.iter().any(|user| user.room == room);
        let user = SessionUser::new(connection_id, name, room, is_first, joined_at);
        self.users.push(user.clone());
        user
    }

    /// コネクション ID に対応する参加者を削除し、削除した参加者を返す
    ///
    /// 残りの参加者の `is_first` は変更しない。
    pub fn remove_user(&mut self, connection_id: &ConnectionId) -> Option<SessionUser> {
        let index = self
            .users
            .iter()
            .position(|user| &user.connection_id == connection_id)?;
        Some(self.users.remove(index))
    }

    pub fn get_user(&self, connection_id: &ConnectionId) -> Option<&SessionUser> {
        self.users
            .iter()
            .find(|user| &user.connection_id == connection_id)
    }

    /// ルームの参加者を参加順で返す
    pub fn users_in_room<'a>(
        &'a self,
        room: &RoomName,
    ) -> impl Iterator<Item = &'a SessionUser> {
        self.users.iter().filter(move |user| &user.room == room)
    }

    /// ルーム内の参加者に選択を追加する
    ///
    /// 参加者がそのルームにいない場合は `None`。既に選択済みなら何もしない。
    pub fn add_choice(
        &mut self,
        connection_id: &ConnectionId,
        room: &RoomName,
        title_id: TitleId,
    ) -> Option<&SessionUser> {
        let user = self
            .users
            .iter_mut()
            .find(|user| &user.room == room && &user.connection_id == connection_id)?;
        user.add_choice(title_id);
        Some(&*user)
    }

    /// ルームの全参加者の選択の積集合
    ///
    /// 参加者が 0 人のルームは空集合。結果の順序は最初の参加者の選択順。
    pub fn check_matches(&self, room: &RoomName) -> Vec<TitleId> {
        let mut members = self.users_in_room(room);
        let Some(first) = members.next() else {
            return Vec::new();
        };
        let others: Vec<&SessionUser> = members.collect();

        first
            .choices
            .iter()
            .filter(|title_id| others.iter().all(|user| user.has_chosen(title_id)))
            .cloned()
            .collect()
    }

    /// 参加者が 1 人以上いるルームの一覧（最初に現れた順）
    pub fn rooms(&self) -> Vec<RoomName> {
        let mut rooms: Vec<RoomName> = Vec::new();
        for user in &self.users {
            if !rooms.contains(&user.room) {
                rooms.push(user.room.clone());
            }
        }
        rooms
    }

    /// ルームの参加者とマッチをまとめて取得する
    ///
    /// 参加者が 0 人なら `users` と `matches` はどちらも空。
    pub fn snapshot(&self, room: &RoomName) -> RoomSnapshot {
        RoomSnapshot {
            room: room.clone(),
            users: self.users_in_room(room).cloned().collect(),
            matches: self.check_matches(room),
        }
    }
}
