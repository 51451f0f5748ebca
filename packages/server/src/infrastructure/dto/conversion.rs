//! Conversion logic between DTOs and domain entities.

use crate::domain::{FilterChange, RoomSnapshot, SessionEvent, SessionUser, Show, TitleId};
use crate::infrastructure::dto::{http, websocket as ws};
use shuffler_shared::time::millis_to_rfc3339;

fn title_ids_to_strings(titles: &[TitleId]) -> Vec<String> {
    titles.iter().map(|t| t.as_str().to_string()).collect()
}

// ========================================
// DTO → Domain
// ========================================

impl From<http::ShowDto> for Show {
    fn from(dto: http::ShowDto) -> Self {
        Show::new(dto.id, dto.episodes)
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<&SessionUser> for ws::SessionUserInfo {
    fn from(user: &SessionUser) -> Self {
        Self {
            name: user.name.as_str().to_string(),
            room: user.room.as_str().to_string(),
            is_first: user.is_first,
            joined_at: user.joined_at.value(),
        }
    }
}

impl From<&SessionEvent> for ws::ServerMessage {
    fn from(event: &SessionEvent) -> Self {
        match event {
            SessionEvent::SessionUsers(users) => Self::SessionUsers {
                users: users.iter().map(ws::SessionUserInfo::from).collect(),
            },
            SessionEvent::Matches(matches) => Self::SetMatches {
                matches: title_ids_to_strings(matches),
            },
            SessionEvent::FilterChanged(FilterChange::MediaType(value)) => Self::SetType {
                value: value.clone(),
            },
            SessionEvent::FilterChanged(FilterChange::Genre(value)) => Self::SetGenre {
                value: value.clone(),
            },
            SessionEvent::FilterChanged(FilterChange::SortBy(value)) => Self::SetSortBy {
                value: value.clone(),
            },
            SessionEvent::Rejected(reason) => Self::Error {
                message: reason.clone(),
            },
        }
    }
}

impl From<&RoomSnapshot> for http::RoomSummaryDto {
    fn from(snapshot: &RoomSnapshot) -> Self {
        Self {
            room: snapshot.room.as_str().to_string(),
            users: snapshot
                .users
                .iter()
                .map(|u| u.name.as_str().to_string())
                .collect(),
            matches: title_ids_to_strings(&snapshot.matches),
        }
    }
}

impl From<&RoomSnapshot> for http::RoomDetailDto {
    fn from(snapshot: &RoomSnapshot) -> Self {
        Self {
            room: snapshot.room.as_str().to_string(),
            users: snapshot
                .users
                .iter()
                .map(|u| http::UserDetailDto {
                    name: u.name.as_str().to_string(),
                    is_first: u.is_first,
                    choices: title_ids_to_strings(&u.choices),
                    joined_at: millis_to_rfc3339(u.joined_at.value()),
                })
                .collect(),
            matches: title_ids_to_strings(&snapshot.matches),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, RoomName, Timestamp, UserName};

    fn create_test_user(name: &str, choices: &[&str], is_first: bool) -> SessionUser {
        let mut user = SessionUser::new(
            ConnectionId::new(format!("conn-{}", name)).unwrap(),
            UserName::new(name.to_string()).unwrap(),
            RoomName::new("r1".to_string()).unwrap(),
            is_first,
            Timestamp::new(1_672_531_200_000),
        );
        for c in choices {
            user.add_choice(TitleId::new(c.to_string()).unwrap());
        }
        user
    }

    #[test]
    fn test_show_dto_accepts_rating_key_alias() {
        // テスト項目: ratingKey フィールドでも番組 ID として読み込める
        // given (前提条件):
        let json = r#"{"ratingKey":"42","episodes":["e1","e2"]}"#;

        // when (操作):
        let dto: http::ShowDto = serde_json::from_str(json).unwrap();
        let show = Show::from(dto);

        // then (期待する結果):
        assert_eq!(show.id, "42");
        assert_eq!(show.episodes, vec!["e1", "e2"]);
    }

    #[test]
    fn test_session_users_event_hides_connection_ids() {
        // テスト項目: 参加者一覧のメッセージにはコネクション ID が含まれない
        // given (前提条件):
        let event = SessionEvent::SessionUsers(vec![
            create_test_user("Alice", &[], true),
            create_test_user("Bob", &[], false),
        ]);

        // when (操作):
        let json = serde_json::to_string(&ws::ServerMessage::from(&event)).unwrap();

        // then (期待する結果):
        assert!(json.contains(r#""type":"session_users""#));
        assert!(json.contains("Alice"));
        assert!(!json.contains("conn-Alice"));
    }

    #[test]
    fn test_filter_change_conversion() {
        // テスト項目: フィルタ変更イベントが対応するメッセージに変換される
        // given (前提条件):
        let event = SessionEvent::FilterChanged(FilterChange::SortBy("year".to_string()));

        // when (操作):
        let message = ws::ServerMessage::from(&event);

        // then (期待する結果):
        assert_eq!(
            message,
            ws::ServerMessage::SetSortBy {
                value: "year".to_string()
            }
        );
    }

    #[test]
    fn test_rejected_event_becomes_error_message() {
        // テスト項目: 拒否イベントは error メッセージとして送られる
        // given (前提条件):
        let event = SessionEvent::Rejected("Invalid event: name must not be empty".to_string());

        // when (操作):
        let json = serde_json::to_string(&ws::ServerMessage::from(&event)).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            r#"{"type":"error","message":"Invalid event: name must not be empty"}"#
        );
    }

    #[test]
    fn test_room_detail_conversion() {
        // テスト項目: ルームのスナップショットが詳細 DTO に変換される
        // given (前提条件):
        let snapshot = RoomSnapshot {
            room: RoomName::new("r1".to_string()).unwrap(),
            users: vec![create_test_user("Alice", &["t1", "t2"], true)],
            matches: vec![
                TitleId::new("t1".to_string()).unwrap(),
                TitleId::new("t2".to_string()).unwrap(),
            ],
        };

        // when (操作):
        let dto = http::RoomDetailDto::from(&snapshot);

        // then (期待する結果):
        assert_eq!(dto.room, "r1");
        assert_eq!(dto.users.len(), 1);
        assert_eq!(dto.users[0].choices, vec!["t1", "t2"]);
        assert_eq!(dto.users[0].joined_at, "2023-01-01T00:00:00.000Z");
        assert_eq!(dto.matches, vec!["t1", "t2"]);
    }
}
