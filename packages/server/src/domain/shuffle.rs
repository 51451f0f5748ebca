//! 番組のエピソードを交互に混ぜたプレイリスト順を作るシャッフルエンジン
//!
//! 複数の番組が与えられた場合、毎回「残りエピソード数 / 全体の残りエピソード数」を
//! 重みとして番組を 1 つ抽選し、その番組の次のエピソードを出力に追加します
//! （重み付き非復元抽出）。番組内のエピソード順は入力のまま保たれます。
//!
//! 番組が 1 つだけの場合は混ぜる相手がいないため、単純なランダム並べ替えになります。

use rand::{
    Rng,
    distr::{Distribution, weighted::WeightedIndex},
    seq::SliceRandom,
};

/// シャッフル対象の番組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// 番組の識別子（Plex の rating key）
    pub id: String,
    /// 放送順のエピソード識別子
    pub episodes: Vec<String>,
}

impl Show {
    pub fn new(id: impl Into<String>, episodes: Vec<String>) -> Self {
        Self {
            id: id.into(),
            episodes,
        }
    }
}

/// シャッフル中の番組ごとの状態
///
/// 残り数は `episodes.len() - cursor` から毎回求めるため、カーソルと食い違うことがない。
#[derive(Debug)]
struct ShowState<'a> {
    id: &'a str,
    episodes: &'a [String],
    cursor: usize,
}

impl<'a> ShowState<'a> {
    fn new(show: &'a Show) -> Self {
        Self {
            id: &show.id,
            episodes: &show.episodes,
            cursor: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.episodes.len() - self.cursor
    }

    /// カーソル位置のエピソードを取り出して 1 つ進める
    fn take_next(&mut self) -> Option<&'a String> {
        let episode = self.episodes.get(self.cursor)?;
        self.cursor += 1;
        Some(episode)
    }
}

/// スレッドローカルの乱数生成器でシャッフルする
pub fn shuffle_episodes(shows: &[Show]) -> Vec<String> {
    shuffle_episodes_with_rng(shows, &mut rand::rng())
}

/// 指定した乱数生成器でシャッフルする
///
/// # Returns
///
/// 全エピソードを 1 回ずつ含む再生順。`shows` が空の場合は空のリスト。
pub fn shuffle_episodes_with_rng<R: Rng + ?Sized>(shows: &[Show], rng: &mut R) -> Vec<String> {
    let total_episodes: usize = shows.iter().map(|show| show.episodes.len()).sum();
    tracing::debug!(
        "Starting playlist shuffle ({} shows, {} episodes)",
        shows.len(),
        total_episodes
    );

    match shows {
        [] => {
            tracing::warn!("No shows given to shuffle, returning an empty playlist");
            Vec::new()
        }
        [show] => {
            tracing::debug!(
                "Single show '{}' with {} episodes, using a plain shuffle",
                show.id,
                show.episodes.len()
            );
            let mut episodes = show.episodes.clone();
            episodes.shuffle(rng);
            episodes
        }
        _ => interleave(shows, total_episodes, rng),
    }
}

fn interleave<R: Rng + ?Sized>(
    shows: &[Show],
    total_episodes: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut states: Vec<ShowState<'_>> = shows.iter().map(ShowState::new).collect();
    let mut total_remaining = total_episodes;
    let mut shuffled = Vec::with_capacity(total_episodes);
    let mut iterations = 0usize;

    while total_remaining > 0 {
        iterations += 1;

        // 重みは抽選のたびに作り直す（残り数が毎回変わるため）
        let (eligible, weights): (Vec<usize>, Vec<f64>) = states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.remaining() > 0)
            .map(|(index, state)| (index, state.remaining() as f64 / total_remaining as f64))
            .unzip();

        let distribution = match WeightedIndex::new(&weights) {
            Ok(distribution) => distribution,
            Err(e) => {
                tracing::warn!("No show left to draw from ({}), stopping shuffle early", e);
                break;
            }
        };

        let drawn = distribution.sample(rng);
        let Some(&index) = eligible.get(drawn) else {
            tracing::warn!("Drawn index {} has no live show, stopping shuffle early", drawn);
            break;
        };
        let Some(state) = states.get_mut(index) else {
            break;
        };
        let Some(episode) = state.take_next() else {
            break;
        };

        shuffled.push(episode.clone());
        total_remaining -= 1;

        if state.remaining() == 0 {
            let exhausted = states.remove(index);
            tracing::debug!(
                "Show '{}' exhausted, {} shows remaining",
                exhausted.id,
                states.len()
            );
        }
    }

    tracing::info!(
        "Playlist shuffle completed ({} episodes from {} shows in {} draws)",
        shuffled.len(),
        shows.len(),
        iterations
    );

    shuffled
}
