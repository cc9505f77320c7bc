//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::config::rules::{CARDS_PER_SUIT, FOUNDATION_COUNT};

/// 4 つの組札の枚数から、クリアしたかを判定する。
/// ちょうど 4 つあって、全部 13 枚ならクリア！🏆
pub fn check_win_condition<I>(foundation_sizes: I) -> bool
where
    I: IntoIterator<Item = usize>,
{
    let mut count = 0;
    for size in foundation_sizes {
        if size != CARDS_PER_SUIT {
            return false;
        }
        count += 1;
    }
    count == FOUNDATION_COUNT
}
