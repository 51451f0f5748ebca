//! UseCase: シャッフル済みプレイリストの作成
//!
//! 番組ごとのエピソード一覧を受け取り、再生順を返します。
//! Plex サーバーへのプレイリスト登録は呼び出し側の責務です。

use crate::domain::{Show, shuffle_episodes};

/// プレイリストシャッフルのユースケース
#[derive(Debug, Default)]
pub struct ShufflePlaylistUseCase;

impl ShufflePlaylistUseCase {
    pub fn new() -> Self {
        Self
    }

    /// シャッフルを実行
    ///
    /// # Returns
    ///
    /// 全エピソードを 1 回ずつ含む再生順。番組が無ければ空のリスト。
    pub fn execute(&self, shows: &[Show]) -> Vec<String> {
        let episodes = shuffle_episodes(shows);
        tracing::debug!(
            "Shuffled {} episodes from {} shows",
            episodes.len(),
            shows.len()
        );
        episodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_contains_every_episode_once() {
        // テスト項目: 全エピソードが 1 回ずつ含まれる
        // given (前提条件):
        let shows = vec![
            Show::new("A", vec!["a1".to_string(), "a2".to_string()]),
            Show::new("B", vec!["b1".to_string()]),
        ];
        let usecase = ShufflePlaylistUseCase::new();

        // when (操作):
        let mut result = usecase.execute(&shows);

        // then (期待する結果):
        result.sort();
        assert_eq!(result, vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn test_shuffle_without_shows() {
        // テスト項目: 番組が無い場合は空のリスト
        // given (前提条件):
        let usecase = ShufflePlaylistUseCase::new();
        let shows: Vec<Show> = Vec::new();

        // when (操作):
        let result = usecase.execute(&shows);

        // then (期待する結果):
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_large_shuffle_on_blocking_pool() {
        // テスト項目: 大きな入力をブロッキングスレッドで実行しても全エピソードが揃う
        // given (前提条件):
        let usecase = std::sync::Arc::new(ShufflePlaylistUseCase::new());
        let shows: Vec<Show> = (0..50)
            .map(|s| {
                let episodes = (0..200).map(|e| format!("{}-{}", s, e)).collect();
                Show::new(format!("show{}", s), episodes)
            })
            .collect();
        let expected_total = 50 * 200;

        // when (操作):
        let result = tokio::task::spawn_blocking(move || usecase.execute(&shows))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(result.len(), expected_total);
        let mut unique = result.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), expected_total);
    }
}
