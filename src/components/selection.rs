// src/components/selection.rs

use serde::{Deserialize, Serialize};

use crate::components::stack::StackType;

/// 「カードを掴んだけど、まだ置き場所を決めてない」状態を表すよ！🖱️🃏
///
/// `select_source` / `select_run` でセットされて、`request_move`、`undo`、
/// `reset_game`、`deselect` でクリアされる。山の中身は一切変えない。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionHandle {
    /// 掴んだ山。
    pub source: StackType,
    /// 上から何枚掴んだか。場札以外は常に 1。
    pub count: usize,
}

impl SelectionHandle {
    pub fn new(source: StackType, count: usize) -> Self {
        Self { source, count }
    }
}
