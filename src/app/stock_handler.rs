// src/app/stock_handler.rs
//! Handles clicks on the Stock pile (dealing to Waste, recycling Waste).

use log::info;

use crate::game::{DrawOutcome, Solitaire};
use crate::protocol::MoveResult;

/// Runs one stock click and describes what happened.
/// Drawing with both Stock and Waste empty is accepted as an idle no-op.
pub fn handle_stock_click(game: &mut Solitaire) -> MoveResult {
    match game.draw_stock() {
        DrawOutcome::Drew(card) => MoveResult::accepted_with(format!("drew {}", card)),
        DrawOutcome::Recycled(count) => MoveResult::accepted_with(format!("recycled {} card(s)", count)),
        DrawOutcome::Idle => {
            info!("Stock click ignored: Stock and Waste are empty.");
            MoveResult::accepted_with("idle")
        }
    }
}
