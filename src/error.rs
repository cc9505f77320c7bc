// src/error.rs
//! エンジンが返すエラーの種類をまとめるよ。
//! どれも回復可能で、拒否された操作は状態を一切変えない。

use thiserror::Error;

use crate::components::card::Card;
use crate::components::stack::StackType;

/// 移動リクエストが拒否された理由。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// 山の番号が範囲外 (場札 0-6、組札 0-3)。
    #[error("out-of-range index: {0}")]
    InvalidIndex(StackType),
    /// 空の山から動かそうとした。
    #[error("empty source: {0} has no cards")]
    EmptySource(StackType),
    /// ルール違反。
    #[error("rule violation: {0}")]
    RuleViolation(Violation),
    /// 何も選択していないのに request_move が呼ばれた。
    #[error("no card is selected")]
    NoSelection,
}

impl MoveError {
    /// プレゼン層向けの固定カテゴリ文字列。
    pub fn reason(&self) -> &'static str {
        match self {
            MoveError::InvalidIndex(_) => "out-of-range index",
            MoveError::EmptySource(_) => "empty source",
            MoveError::RuleViolation(_) => "rule violation",
            MoveError::NoSelection => "no selection",
        }
    }
}

impl From<Violation> for MoveError {
    fn from(violation: Violation) -> Self {
        MoveError::RuleViolation(violation)
    }
}

/// ルール違反の詳細。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{card} cannot be placed on {target}")]
    IllegalPlacement { card: Card, target: StackType },
    #[error("the requested run contains a face-down card")]
    FaceDownInRun,
    #[error("the requested run is not a descending alternating-color sequence")]
    BrokenRun,
    #[error("cannot move {count} card(s) from a pile of {len}")]
    InvalidCount { count: usize, len: usize },
    #[error("only a single card can move to a foundation, {count} selected")]
    RunToFoundation { count: usize },
    #[error("no foundation accepts {card}")]
    NoFoundationAccepts { card: Card },
    #[error("source and destination are the same pile")]
    SamePile,
    #[error("moving from {from} to {to} is not allowed")]
    UnsupportedRoute { from: StackType, to: StackType },
}

/// 設定の読み込みエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid game config: {0}")]
    Json(#[from] serde_json::Error),
}
