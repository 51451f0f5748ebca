//! 値オブジェクト
//!
//! 文字列で受け取った識別子をドメインに入る前に正規化・検証します。
//! `UserName` と `RoomName` は前後の空白を除去した値を保持し、比較は
//! 大文字小文字を区別した完全一致です。

use std::fmt;

use super::error::ValueObjectError;

/// 空でないことだけを検証する（長さの上限はトランスポート層のフレーム上限に任せる）
fn validate(field: &'static str, value: String, trim: bool) -> Result<String, ValueObjectError> {
    let value = if trim {
        value.trim().to_string()
    } else {
        value
    };

    if value.is_empty() {
        return Err(ValueObjectError::Empty(field));
    }

    Ok(value)
}

/// トランスポート層が割り当てるコネクション ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate("connection id", value, false).map(Self)
    }

    /// 新しいランダムな ID（UUID v4）を生成
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// セッション参加者の表示名（trim 済み）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate("user name", value, true).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ルーム名（trim 済み）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate("room name", value, true).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// タイトルの識別子（Plex の rating key）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleId(String);

impl TitleId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        validate("title id", value, false).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for TitleId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unix タイムスタンプ（ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
