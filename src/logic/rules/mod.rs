// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! 合法手かどうかの判定はここにしかない。全部副作用なしの純粋関数。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::CardColor;
pub use foundation::can_place_on_foundation;
pub use move_validation::check_placement;
pub use stock_waste::{can_deal_from_stock, can_reset_stock_from_waste};
pub use tableau::{can_place_on_tableau, is_movable_run};
pub use win_condition::check_win_condition;
