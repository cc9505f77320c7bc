// src/logic/mod.rs
//! ゲームのルールとデッキ操作をまとめるモジュール。

pub mod auto_move;
pub mod deck;
pub mod rules;
