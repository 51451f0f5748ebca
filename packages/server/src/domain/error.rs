//! ドメイン層のエラー型

use thiserror::Error;

/// 値オブジェクト生成時のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// 空文字列（前後の空白を除去した結果が空の場合も含む）
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// メッセージ送信（通知）時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// 送信先のコネクションが登録されていない
    #[error("Connection '{0}' not found")]
    ClientNotFound(String),

    /// 送信に失敗（チャンネルがクローズ済みなど）
    #[error("Failed to push message: {0}")]
    PushFailed(String),
}
