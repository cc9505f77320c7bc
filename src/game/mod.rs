// src/game/mod.rs
//! ゲームの状態 (山・履歴) と、それを操作するエンジン。

pub mod engine;
pub mod piles;
pub mod undo;

pub use engine::{DrawOutcome, Solitaire};
pub use piles::Piles;
pub use undo::{GameSnapshot, UndoManager};
