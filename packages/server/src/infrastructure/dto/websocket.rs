//! WebSocket message DTOs.
//!
//! Every message is a JSON object tagged by its `type` field, e.g.
//! `{"type":"add_user_choice","room":"movie-night","rating_key":"1234"}`.

use serde::{Deserialize, Serialize};

/// Events sent by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Announce entry into a room (also used to re-announce after reconnect)
    UserEnteredSession { name: String, room: String },
    /// Swipe "yes" on a title
    AddUserChoice { room: String, rating_key: String },
    ChangeType { room: String, value: String },
    ChangeGenre { room: String, value: String },
    ChangeSortBy { room: String, value: String },
}

/// Messages sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Current room members in join order
    SessionUsers { users: Vec<SessionUserInfo> },
    /// Titles every member has chosen
    SetMatches { matches: Vec<String> },
    SetType { value: String },
    SetGenre { value: String },
    SetSortBy { value: String },
    /// Sent only to the connection whose event was rejected
    Error { message: String },
}

/// Public view of a room member (connection ids are never exposed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUserInfo {
    pub name: String,
    pub room: String,
    pub is_first: bool,
    /// Unix timestamp in milliseconds
    pub joined_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_event_wire_format() {
        // テスト項目: クライアントイベントが type タグ付きの JSON から読み込める
        // given (前提条件):
        let json = r#"{"type":"user_entered_session","name":"Alice","room":"r1"}"#;

        // when (操作):
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::UserEnteredSession {
                name: "Alice".to_string(),
                room: "r1".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        // テスト項目: 未知の type はパースエラーになる
        // when (操作):
        let result = serde_json::from_str::<ClientEvent>(r#"{"type":"dance","room":"r1"}"#);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_server_message_wire_format() {
        // テスト項目: サーバーメッセージが type タグ付きの JSON になる
        // given (前提条件):
        let message = ServerMessage::SetMatches {
            matches: vec!["t2".to_string()],
        };

        // when (操作):
        let json = serde_json::to_value(&message).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({"type": "set_matches", "matches": ["t2"]})
        );
    }
}
