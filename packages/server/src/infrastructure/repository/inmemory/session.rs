//! InMemory Session Repository 実装
//!
//! ドメイン層が定義する SessionRepository trait の具体的な実装。
//! `SessionRegistry` を 1 つの Mutex で保護し、各操作はロックを 1 回だけ取得します。
//! これによりマルチスレッドのランタイム上でも操作単位で直列化されます。
//!
//! プロセスローカルのため、複数プロセスに水平スケールした場合は共有されません。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, RoomName, RoomSnapshot, SessionRegistry, SessionRepository, SessionUser,
    Timestamp, TitleId, UserName,
};
use shuffler_shared::time::now_millis;

/// インメモリ Session Repository 実装
pub struct InMemorySessionRepository {
    registry: Arc<Mutex<SessionRegistry>>,
}

impl InMemorySessionRepository {
    /// 新しい InMemorySessionRepository を作成
    pub fn new(registry: Arc<Mutex<SessionRegistry>>) -> Self {
        Self { registry }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(SessionRegistry::new())))
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn add_user(
        &self,
        connection_id: ConnectionId,
        name: UserName,
        room: RoomName,
    ) -> (SessionUser, RoomSnapshot) {
        let mut registry = self.registry.lock().await;
        let user = registry.add_user(connection_id, name, room, Timestamp::new(now_millis()));
        let snapshot = registry.snapshot(&user.room);
        (user, snapshot)
    }

    async fn remove_user(
        &self,
        connection_id: &ConnectionId,
    ) -> Option<(SessionUser, RoomSnapshot)> {
        let mut registry = self.registry.lock().await;
        let user = registry.remove_user(connection_id)?;
        let snapshot = registry.snapshot(&user.room);
        Some((user, snapshot))
    }

    async fn get_user(&self, connection_id: &ConnectionId) -> Option<SessionUser> {
        let registry = self.registry.lock().await;
        registry.get_user(connection_id).cloned()
    }

    async fn add_choice(
        &self,
        connection_id: &ConnectionId,
        room: &RoomName,
        title_id: TitleId,
    ) -> Option<RoomSnapshot> {
        let mut registry = self.registry.lock().await;
        registry.add_choice(connection_id, room, title_id)?;
        Some(registry.snapshot(room))
    }

    async fn get_room(&self, room: &RoomName) -> RoomSnapshot {
        let registry = self.registry.lock().await;
        registry.snapshot(room)
    }

    async fn get_rooms(&self) -> Vec<RoomSnapshot> {
        let registry = self.registry.lock().await;
        registry
            .rooms()
            .iter()
            .map(|room| registry.snapshot(room))
            .collect()
    }
}
