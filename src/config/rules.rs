// src/config/rules.rs
//! 盤面の大きさに関する定数を定義するよ！
//! 山の数やデッキの枚数など。

pub const TABLEAU_COUNT: usize = 7; // 場札の列数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数 (スートの数と同じ)
pub const CARDS_PER_SUIT: usize = 13; // A から K まで
pub const DECK_SIZE: usize = FOUNDATION_COUNT * CARDS_PER_SUIT; // 52 枚

// 配り終わった直後の枚数: 場札 1+2+...+7 = 28 枚、残り 24 枚が山札
pub const DEALT_TABLEAU_CARDS: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;
pub const INITIAL_STOCK_SIZE: usize = DECK_SIZE - DEALT_TABLEAU_CARDS;
