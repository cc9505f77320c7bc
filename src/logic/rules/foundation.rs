//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};

/// `card` を、一番上が `foundation_top` の組札に置けるかチェックする。
///
/// - 空の組札: A だけ置ける (どのスートでも OK、最初の A でスートが決まる)
/// - それ以外: 同じスートで、ランクがちょうど 1 つ上
pub fn can_place_on_foundation(card: &Card, foundation_top: Option<&Card>) -> bool {
    match foundation_top {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && card.rank.value() == top.rank.value() + 1,
    }
}
