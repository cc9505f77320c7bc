// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::stack::Pile;
use crate::config::rules::{DECK_SIZE, TABLEAU_COUNT};
use crate::game::piles::Piles;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
///
/// 乱数生成器は呼び出し側から注入する。シード付きの `StdRng` を渡せば
/// 同じ配りを何度でも再現できる。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シャッフル済みのデッキを場札 7 列と山札に配るよ。
///
/// 山札の「上」は Vec の末尾。配りも引きも末尾から取る。
/// 列 i には i+1 枚、最後の 1 枚だけ表向き。残り 24 枚が山札 (全部裏向き)。
pub fn deal_initial_piles(deck: Vec<Card>) -> Piles {
    let mut stock = Pile::from_cards(deck);
    let mut piles = Piles::default();

    for (i, tableau) in piles.tableaus.iter_mut().enumerate() {
        for j in 0..=i {
            if let Some(mut card) = stock.pop() {
                card.is_face_up = j == i;
                tableau.push(card);
            }
        }
    }
    debug_assert_eq!(piles.tableaus.len(), TABLEAU_COUNT);

    for card in stock.drain_all() {
        piles.stock.push(Card { is_face_up: false, ..card });
    }
    piles
}
