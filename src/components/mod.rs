// src/components/mod.rs

// ゲームのデータ部品をまとめるモジュールだよ！整理整頓！🧹✨
pub mod card;
pub mod game_state;
pub mod selection;
pub mod stack;

pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use selection::SelectionHandle;
pub use stack::{Pile, StackType};
