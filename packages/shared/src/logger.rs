//! Logging setup for the server and client binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Both the library crates of the workspace and the binary itself log at
/// `default_log_level`. The filter can be overridden with `RUST_LOG`.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "shuffler-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use shuffler_shared::logger::setup_logger;
///
/// setup_logger("shuffler-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the default `EnvFilter` directive string.
///
/// Crate names use `_` in tracing targets, so `shuffler-server` becomes
/// `shuffler_server`.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let mut targets = vec![
        "shuffler_shared".to_string(),
        "shuffler_server".to_string(),
        "shuffler_client".to_string(),
        "tower_http".to_string(),
    ];
    let binary_target = binary_name.replace('-', "_");
    if !targets.contains(&binary_target) {
        targets.push(binary_target);
    }

    targets
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_workspace_crates() {
        // テスト項目: デフォルトのフィルタがワークスペースの全クレートを対象にする
        // given (前提条件):
        let binary_name = "shuffler-server";

        // when (操作):
        let filter = default_filter(binary_name, "debug");

        // then (期待する結果):
        assert!(filter.contains("shuffler_server=debug"));
        assert!(filter.contains("shuffler_shared=debug"));
        assert!(filter.contains("tower_http=debug"));
        // バイナリ名がクレート名と同じ場合は重複しない
        assert_eq!(filter.matches("shuffler_server=").count(), 1);
    }

    #[test]
    fn test_default_filter_adds_unknown_binary() {
        // テスト項目: ワークスペース外のバイナリ名もフィルタに追加される
        // given (前提条件):
        let binary_name = "match-bot";

        // when (操作):
        let filter = default_filter(binary_name, "info");

        // then (期待する結果):
        assert!(filter.ends_with("match_bot=info"));
    }
}
