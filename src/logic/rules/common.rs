//! ルール判定で共通して使うヘルパーや型を置くよ。

use crate::components::card::{Card, Suit};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        if suit.is_red() {
            CardColor::Red
        } else {
            CardColor::Black
        }
    }

    pub fn of(card: &Card) -> Self {
        Self::from_suit(card.suit)
    }
}

/// `lower` が `upper` のちょうど 1 つ下のランクか。
pub(crate) fn is_one_rank_below(lower: &Card, upper: &Card) -> bool {
    lower.rank.value() + 1 == upper.rank.value()
}
