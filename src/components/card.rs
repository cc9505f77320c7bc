// src/components/card.rs

use std::fmt;

// serde を使う宣言！カード情報を JSON にしてプレゼン層へ渡すときに使うよ。
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// - Clone, Copy: カードは値として扱うので簡単にコピーできるように
/// - Hash: HashSet で「52枚揃ってるか」をチェックするのに使う
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// 判別値がそのまま序数 (A=1 ... K=13) になってる。
/// ラップアラウンドはなし！K の次はないし、A の前もない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 全スートの固定テーブル。デッキ生成や組札の並び順で使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランクの固定テーブル (A から K まで昇順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

const RANK_LABELS: [&str; 13] = ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];

impl Suit {
    /// スプライトアトラスの行番号とかに使える 0 始まりのインデックス。
    pub fn index(self) -> usize {
        self as usize
    }

    /// ハートとダイヤは赤！
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Spade => "♠",
        }
    }
}

impl Rank {
    /// 比較に使う序数 (A=1 ... K=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 序数からランクに戻す。範囲外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        RANK_LABELS[usize::from(self.value() - 1)]
    }
}

/// カードそのものを表す構造体だよ！🃏
///
/// ゲームロジック上の同一性は `(rank, suit)` だけ。`is_face_up` は
/// 表向きか裏向きかのフラグで、移動やめくりで変わる。
/// Copy なので、スナップショットに入れた時点で完全に独立したコピーになる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    /// 表向きのカードを作る (テストや組み立てで便利)。
    pub fn face_up(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank, is_face_up: true }
    }

    /// 向きを無視した同一性キー。
    pub fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
