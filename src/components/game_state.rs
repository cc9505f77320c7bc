// src/components/game_state.rs

// serde を使う宣言！ゲーム状態をプレゼン層に JSON で渡すよ。
use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
///
/// 一人用なので勝者はいない。プレイ中か、4 つの組札が全部埋まったかだけ。
/// undo で勝利状態から戻ることもあるので、毎回計算し直すよ。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    Playing,
    /// 勝利！全部の組札に 13 枚ずつ
    Won,
}

impl GameStatus {
    pub fn from_win(is_won: bool) -> Self {
        if is_won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}
