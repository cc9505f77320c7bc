//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;

use super::common::{is_one_rank_below, CardColor};
use crate::components::card::{Card, Rank};

/// `card` を、一番上が `tableau_top` の場札に置けるかチェックする。
///
/// - 空の場札: K だけ置ける
/// - それ以外: ランクがちょうど 1 つ下で、色が違うこと
pub fn can_place_on_tableau(card: &Card, tableau_top: Option<&Card>) -> bool {
    match tableau_top {
        None => card.rank == Rank::King,
        Some(top) => is_one_rank_below(card, top) && CardColor::of(card) != CardColor::of(top),
    }
}

/// 場札の run (下から上の順) が、まとめて動かせる形になってるか。
///
/// 全部表向きで、隣り合うペアがすべて「1 つ下 + 色違い」になってる必要がある。
/// 空の run は動かせない。
pub fn is_movable_run(run: &[Card]) -> bool {
    !run.is_empty()
        && run.iter().all(|card| card.is_face_up)
        && run
            .iter()
            .tuple_windows()
            .all(|(below, above)| can_place_on_tableau(above, Some(below)))
}
