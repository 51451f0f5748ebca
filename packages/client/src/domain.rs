//! Reconnection decisions, kept free of I/O for testing.

use crate::error::ClientError;

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that ended the session
/// * `current_attempt` - The reconnection attempts made so far
/// * `max_attempts` - The maximum number of reconnection attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    // エンコード失敗は再接続しても直らない
    if !matches!(error, ClientError::ConnectionError(_)) {
        return false;
    }

    current_attempt < max_attempts
}
