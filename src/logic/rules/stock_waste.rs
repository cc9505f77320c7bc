//! 山札 (Stock) と捨て札 (Waste) のクリック時ルール。

use crate::components::stack::Pile;

/// 山札クリックで 1 枚めくれるか。山札に 1 枚でも残ってれば OK。
pub fn can_deal_from_stock(stock: &Pile) -> bool {
    !stock.is_empty()
}

/// 山札が尽きてて、捨て札を山札に戻せる状態か。
/// 両方空なら false (なにもしないのが正解)。
pub fn can_reset_stock_from_waste(stock: &Pile, waste: &Pile) -> bool {
    stock.is_empty() && !waste.is_empty()
}
