// src/game/undo.rs
//! 一手戻す (undo) ための履歴管理だよ！⏪

use std::collections::VecDeque;

use log::debug;

use crate::game::piles::Piles;

/// ある時点の盤面の完全なコピー。
///
/// `Piles` はカードを値で持ってるので、ライブの山をあとで書き換えても
/// スナップショットの中身は絶対に変わらない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    piles: Piles,
}

impl GameSnapshot {
    pub fn capture(piles: &Piles) -> Self {
        Self { piles: piles.clone() }
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn into_piles(self) -> Piles {
        self.piles
    }
}

/// スナップショットのスタック。
///
/// エンジンは検証が通った後、盤面を書き換える直前に `snapshot` を呼ぶ。
/// だから履歴に「何も変わらなかった手」が入ることはない。
#[derive(Debug, Clone, Default)]
pub struct UndoManager {
    history: VecDeque<GameSnapshot>,
    limit: Option<usize>,
}

impl UndoManager {
    /// 上限なしの履歴。
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい方から `limit` 個だけ残す履歴。`None` なら無制限。
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            history: VecDeque::new(),
            limit,
        }
    }

    /// 今の盤面を積む。上限を超えたら一番古いものを捨てる。
    pub fn snapshot(&mut self, piles: &Piles) {
        if self.limit == Some(0) {
            return;
        }
        self.history.push_back(GameSnapshot::capture(piles));
        if let Some(limit) = self.limit {
            while self.history.len() > limit {
                self.history.pop_front();
                debug!("Undo history over limit {}, dropped oldest snapshot", limit);
            }
        }
    }

    /// 一番新しいスナップショットを取り出す。空なら None (エラーじゃないよ)。
    pub fn undo(&mut self) -> Option<GameSnapshot> {
        self.history.pop_back()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
