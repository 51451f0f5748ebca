//! Repository trait 定義
//!
//! ドメイン層が必要とするセッションデータへのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。
//!
//! 各メソッドは `SessionRegistry` の 1 操作に対応し、実装は操作ごとに
//! レジストリ全体を直列化しなければなりません。

use async_trait::async_trait;

use super::{ConnectionId, RoomName, RoomSnapshot, SessionUser, TitleId, UserName};

/// Session Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
/// 変更を伴う操作は、変更後のルームのスナップショットを同じ操作の中で返す。
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 参加者をルームに追加（同名の参加者がいれば再接続として付け替え）
    async fn add_user(
        &self,
        connection_id: ConnectionId,
        name: UserName,
        room: RoomName,
    ) -> (SessionUser, RoomSnapshot);

    /// 参加者を削除し、削除した参加者と元のルームの残りの状態を返す
    async fn remove_user(
        &self,
        connection_id: &ConnectionId,
    ) -> Option<(SessionUser, RoomSnapshot)>;

    /// コネクション ID から参加者を取得
    async fn get_user(&self, connection_id: &ConnectionId) -> Option<SessionUser>;

    /// ルーム内の参加者に選択を追加し、追加後のルームの状態を返す
    ///
    /// 参加者がそのルームにいなければ `None`。
    async fn add_choice(
        &self,
        connection_id: &ConnectionId,
        room: &RoomName,
        title_id: TitleId,
    ) -> Option<RoomSnapshot>;

    /// ルームの参加者とマッチ（参加者がいなければどちらも空）
    async fn get_room(&self, room: &RoomName) -> RoomSnapshot;

    /// 参加者のいる全ルームの状態（最初に現れた順）
    async fn get_rooms(&self) -> Vec<RoomSnapshot>;
}
