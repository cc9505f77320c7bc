// src/protocol.rs

// このファイルは、エンジンとプレゼン層 (描画・入力) の間で
// やり取りするデータの形式を定義するよ！💌
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::selection::SelectionHandle;
use crate::components::stack::{Pile, StackType};
use crate::error::MoveError;

// --- プレゼン層からエンジンへ送るコマンド ---

/// 入力をエンジン操作に翻訳したもの。
/// `{"type": "RequestMove", "target": {"Tableau": 3}}` みたいな JSON で届く。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Command {
    /// 山札をクリック
    DrawStock,
    /// 山の一番上を掴む
    SelectSource { source: StackType },
    /// 場札の上から複数枚を掴む
    SelectRun { source: StackType, count: usize },
    /// 掴んでるカードを置く
    RequestMove { target: StackType },
    /// 掴んでるカードを離す
    Deselect,
    /// ダブルクリックで組札へ
    AutoMove { source: StackType },
    Undo,
    ResetGame,
}

/// コマンドの結果。拒否されたときは `reason` にカテゴリ、`detail` に詳細が入る。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub accepted: bool,
    pub reason: Option<String>,
    pub detail: Option<String>,
}

impl MoveResult {
    pub fn accepted() -> Self {
        Self { accepted: true, reason: None, detail: None }
    }

    pub fn accepted_with(detail: impl Into<String>) -> Self {
        Self { accepted: true, reason: None, detail: Some(detail.into()) }
    }

    pub fn rejected(reason: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { accepted: false, reason: Some(reason.into()), detail: Some(detail.into()) }
    }
}

impl From<&MoveError> for MoveResult {
    fn from(err: &MoveError) -> Self {
        MoveResult::rejected(err.reason(), err.to_string())
    }
}

impl<T> From<Result<T, MoveError>> for MoveResult {
    fn from(result: Result<T, MoveError>) -> Self {
        match result {
            Ok(_) => MoveResult::accepted(),
            Err(err) => MoveResult::from(&err),
        }
    }
}

// --- エンジンからプレゼン層へ渡す盤面データ ---

/// カード 1 枚分の描画情報。
/// `rank_value` と `suit_index` はスプライトアトラスの列・行にそのまま使える。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    pub rank_value: u8,
    pub suit_index: usize,
    pub is_face_up: bool,
    pub label: String,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            rank_value: card.rank.value(),
            suit_index: card.suit.index(),
            is_face_up: card.is_face_up,
            label: card.to_string(),
        }
    }
}

/// 山 1 つ分。カードは下から上の順。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileData {
    pub stack_type: StackType,
    pub cards: Vec<CardData>,
}

impl PileData {
    pub fn new(stack_type: StackType, pile: &Pile) -> Self {
        Self {
            stack_type,
            cards: pile.iter().map(CardData::from).collect(),
        }
    }
}

/// 盤面まるごと。描画のたびにこれを読み直せば OK。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub tableaus: Vec<PileData>,
    pub foundations: Vec<PileData>,
    pub waste: PileData,
    pub stock: PileData,
    pub status: GameStatus,
    pub selection: Option<SelectionHandle>,
    pub undo_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;

    #[test]
    fn command_json_shape() {
        let command: Command =
            serde_json::from_str(r#"{"type": "RequestMove", "target": {"Tableau": 3}}"#).expect("valid command");
        assert_eq!(command, Command::RequestMove { target: StackType::Tableau(3) });

        let draw: Command = serde_json::from_str(r#"{"type": "DrawStock"}"#).expect("valid command");
        assert_eq!(draw, Command::DrawStock);

        let select: Command =
            serde_json::from_str(r#"{"type": "SelectSource", "source": "Waste"}"#).expect("valid command");
        assert_eq!(select, Command::SelectSource { source: StackType::Waste });
    }

    #[test]
    fn move_result_from_error() {
        let result = MoveResult::from(Err::<(), _>(MoveError::from(Violation::SamePile)));
        assert!(!result.accepted);
        assert_eq!(result.reason.as_deref(), Some("rule violation"));
        assert_eq!(result.detail.as_deref(), Some("rule violation: source and destination are the same pile"));

        assert_eq!(MoveResult::from(Ok::<(), MoveError>(())), MoveResult::accepted());
    }

    #[test]
    fn card_data_carries_atlas_coordinates() {
        let data = CardData::from(&Card::face_up(Rank::Jack, Suit::Club));
        assert_eq!(data.rank_value, 11);
        assert_eq!(data.suit_index, 2);
        assert_eq!(data.label, "J♣");
    }
}
