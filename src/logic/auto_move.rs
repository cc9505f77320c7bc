// src/logic/auto_move.rs
//! カードの自動移動に関するロジックだよ！🪄✨
//! ダブルクリックで組札へ送る、みたいな操作の行き先を探す。

use crate::components::card::Card;
use crate::components::stack::Pile;
use crate::logic::rules;

/// `card` を受け入れられる組札の番号を探す。見つからなければ None。
///
/// A なら最初の空いてる組札、それ以外は同じスートで 1 つ下が乗ってる組札になる。
pub fn find_automatic_foundation_move(card: &Card, foundations: &[Pile]) -> Option<usize> {
    foundations
        .iter()
        .position(|foundation| rules::can_place_on_foundation(card, foundation.top()))
}

// --- テストコード ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn foundations_with(tops: &[Option<Card>]) -> Vec<Pile> {
        tops.iter()
            .map(|top| Pile::from_cards(top.iter().copied().collect()))
            .collect()
    }

    #[test]
    fn test_find_automatic_foundation_move() {
        let ace_hearts = Card::face_up(Rank::Ace, Suit::Heart);
        let two_hearts = Card::face_up(Rank::Two, Suit::Heart);
        let ace_spades = Card::face_up(Rank::Ace, Suit::Spade);

        // --- シナリオ 1: 全 Foundation が空 ---
        let empty = foundations_with(&[None, None, None, None]);
        assert_eq!(find_automatic_foundation_move(&ace_hearts, &empty), Some(0));
        assert_eq!(find_automatic_foundation_move(&two_hearts, &empty), None);

        // --- シナリオ 2: 2 番目に A❤️ がある ---
        let with_ace = foundations_with(&[None, Some(ace_hearts), None, None]);
        assert_eq!(find_automatic_foundation_move(&two_hearts, &with_ace), Some(1));
        assert_eq!(find_automatic_foundation_move(&ace_spades, &with_ace), Some(0), "A は最初の空きへ");

        // --- シナリオ 3: 空きがなく、スートも合わない ---
        let full = foundations_with(&[Some(ace_hearts); 4]);
        assert_eq!(find_automatic_foundation_move(&ace_spades, &full), None);
    }
}
