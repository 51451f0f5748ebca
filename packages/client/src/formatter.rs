//! Message formatting utilities for client display.

use shuffler_server::infrastructure::dto::websocket::{ServerMessage, SessionUserInfo};
use shuffler_shared::time::millis_to_clock;

const RULE: &str = "============================================================";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format any server message for the terminal
    pub fn format(message: &ServerMessage, current_name: &str) -> String {
        match message {
            ServerMessage::SessionUsers { users } => {
                Self::format_session_users(users, current_name)
            }
            ServerMessage::SetMatches { matches } => Self::format_matches(matches),
            ServerMessage::SetType { value } => Self::format_filter("type", value),
            ServerMessage::SetGenre { value } => Self::format_filter("genre", value),
            ServerMessage::SetSortBy { value } => Self::format_filter("sort", value),
            ServerMessage::Error { message } => format!("\n! {}\n", message),
        }
    }

    /// Format the member list, marking the current user and the room's first member
    pub fn format_session_users(users: &[SessionUserInfo], current_name: &str) -> String {
        let mut output = format!("\n\n{}\nMembers:\n", RULE);

        if users.is_empty() {
            output.push_str("(No members)\n");
        }
        for user in users {
            let me_suffix = if user.name == current_name { " (me)" } else { "" };
            let host_suffix = if user.is_first { " [host]" } else { "" };
            output.push_str(&format!(
                "{}{}{} - joined at {}\n",
                user.name,
                me_suffix,
                host_suffix,
                millis_to_clock(user.joined_at)
            ));
        }

        output.push_str(RULE);
        output.push('\n');
        output
    }

    pub fn format_matches(matches: &[String]) -> String {
        if matches.is_empty() {
            "\n* No matches yet\n".to_string()
        } else {
            format!("\n* Matches: {}\n", matches.join(", "))
        }
    }

    pub fn format_filter(kind: &str, value: &str) -> String {
        format!("\n~ {} changed to '{}'\n", kind, value)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, is_first: bool) -> SessionUserInfo {
        SessionUserInfo {
            name: name.to_string(),
            room: "r1".to_string(),
            is_first,
            joined_at: 1_672_531_230_000,
        }
    }

    #[test]
    fn test_format_session_users() {
        // テスト項目: 参加者一覧で自分と最初の参加者にマークが付く
        // given (前提条件):
        let users = vec![user("alice", true), user("bob", false)];

        // when (操作):
        let result = MessageFormatter::format_session_users(&users, "bob");

        // then (期待する結果):
        assert!(result.contains("alice [host] - joined at 00:00:30"));
        assert!(result.contains("bob (me) - joined at"));
        assert!(!result.contains("alice (me)"));
    }

    #[test]
    fn test_format_empty_session_users() {
        // テスト項目: 参加者が空の場合、適切なメッセージが表示される
        // when (操作):
        let result = MessageFormatter::format_session_users(&[], "alice");

        // then (期待する結果):
        assert!(result.contains("(No members)"));
    }

    #[test]
    fn test_format_matches() {
        // テスト項目: マッチの有無に応じた表示になる
        // then (期待する結果):
        assert_eq!(MessageFormatter::format_matches(&[]), "\n* No matches yet\n");
        assert_eq!(
            MessageFormatter::format_matches(&["t1".to_string(), "t2".to_string()]),
            "\n* Matches: t1, t2\n"
        );
    }

    #[test]
    fn test_format_dispatches_by_message_type() {
        // テスト項目: メッセージの種類ごとにフォーマットされる
        // given (前提条件):
        let genre = ServerMessage::SetGenre {
            value: "Comedy".to_string(),
        };
        let error = ServerMessage::Error {
            message: "Invalid event".to_string(),
        };

        // then (期待する結果):
        assert_eq!(
            MessageFormatter::format(&genre, "alice"),
            "\n~ genre changed to 'Comedy'\n"
        );
        assert_eq!(MessageFormatter::format(&error, "alice"), "\n! Invalid event\n");
    }
}
