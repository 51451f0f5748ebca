//! Parsing of input lines into session commands.
//!
//! A plain line likes the title with that rating key. Lines starting with `/`
//! are commands:
//!
//! | input            | event              |
//! |------------------|--------------------|
//! | `/like <key>`    | `add_user_choice`  |
//! | `/type <value>`  | `change_type`      |
//! | `/genre <value>` | `change_genre`     |
//! | `/sort <value>`  | `change_sort_by`   |
//! | `/quit`          | leave the session  |

use shuffler_server::infrastructure::dto::websocket::ClientEvent;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Like(String),
    Type(String),
    Genre(String),
    Sort(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: /{0}")]
    Unknown(String),

    #[error("/{0} needs a value")]
    MissingValue(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Command::Like(line.to_string()));
        };

        let (name, value) = match rest.split_once(char::is_whitespace) {
            Some((name, value)) => (name, value.trim()),
            None => (rest, ""),
        };
        let required = |command: &'static str| {
            if value.is_empty() {
                Err(CommandError::MissingValue(command))
            } else {
                Ok(value.to_string())
            }
        };

        match name {
            "like" => required("like").map(Command::Like),
            "type" => required("type").map(Command::Type),
            "genre" => required("genre").map(Command::Genre),
            "sort" => required("sort").map(Command::Sort),
            "quit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    /// The event this command sends to `room`, or `None` for `/quit`
    pub fn into_event(self, room: &str) -> Option<ClientEvent> {
        let room = room.to_string();
        match self {
            Command::Like(rating_key) => Some(ClientEvent::AddUserChoice { room, rating_key }),
            Command::Type(value) => Some(ClientEvent::ChangeType { room, value }),
            Command::Genre(value) => Some(ClientEvent::ChangeGenre { room, value }),
            Command::Sort(value) => Some(ClientEvent::ChangeSortBy { room, value }),
            Command::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_like() {
        // テスト項目: コマンドでない入力はそのタイトルの選択になる
        // when (操作):
        let command = Command::parse("  12345 ").unwrap();

        // then (期待する結果):
        assert_eq!(command, Command::Like("12345".to_string()));
    }

    #[test]
    fn test_filter_commands() {
        // テスト項目: フィルタコマンドが値付きで解釈される
        // then (期待する結果):
        assert_eq!(
            Command::parse("/genre Science Fiction"),
            Ok(Command::Genre("Science Fiction".to_string()))
        );
        assert_eq!(Command::parse("/type show"), Ok(Command::Type("show".to_string())));
        assert_eq!(Command::parse("/sort year"), Ok(Command::Sort("year".to_string())));
        assert_eq!(Command::parse("/quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_missing_value_and_unknown_command() {
        // テスト項目: 値のないコマンドと未知のコマンドはエラーになる
        // then (期待する結果):
        assert_eq!(Command::parse("/genre"), Err(CommandError::MissingValue("genre")));
        assert_eq!(
            Command::parse("/dance now"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_into_event() {
        // テスト項目: コマンドがルーム付きのイベントに変換される
        // when (操作):
        let event = Command::Sort("rating".to_string()).into_event("r1");

        // then (期待する結果):
        assert_eq!(
            event,
            Some(ClientEvent::ChangeSortBy {
                room: "r1".to_string(),
                value: "rating".to_string(),
            })
        );
        assert_eq!(Command::Quit.into_event("r1"), None);
    }
}
