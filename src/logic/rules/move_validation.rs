// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use super::{foundation, tableau};
use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::error::Violation;

/// `card` を `target` (一番上が `target_top`) に置けるか検証する。
///
/// 場札と組札以外 (Stock / Waste) への直接移動は許可しない。
pub fn check_placement(card: &Card, target: StackType, target_top: Option<&Card>) -> Result<(), Violation> {
    let allowed = match target {
        StackType::Tableau(_) => tableau::can_place_on_tableau(card, target_top),
        StackType::Foundation(_) => foundation::can_place_on_foundation(card, target_top),
        StackType::Stock | StackType::Waste => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(Violation::IllegalPlacement { card: *card, target })
    }
}
