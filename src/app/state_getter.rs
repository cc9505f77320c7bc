//! Builds the read model of the current game and converts it to JSON.

use log::{debug, error};

use crate::components::stack::StackType;
use crate::game::Solitaire;
use crate::protocol::{GameStateData, PileData};

/// Snapshot of every pile plus status, selection and undo depth, for rendering.
pub fn get_state_data(game: &Solitaire) -> GameStateData {
    let piles = game.piles();
    GameStateData {
        tableaus: piles
            .tableaus
            .iter()
            .enumerate()
            .map(|(i, pile)| PileData::new(StackType::Tableau(i), pile))
            .collect(),
        foundations: piles
            .foundations
            .iter()
            .enumerate()
            .map(|(i, pile)| PileData::new(StackType::Foundation(i), pile))
            .collect(),
        waste: PileData::new(StackType::Waste, &piles.waste),
        stock: PileData::new(StackType::Stock, &piles.stock),
        status: game.status(),
        selection: game.selection(),
        undo_depth: game.undo_depth(),
    }
}

/// Same as [`get_state_data`], serialized.
pub fn get_state_json(game: &Solitaire) -> Result<String, serde_json::Error> {
    let data = get_state_data(game);
    match serde_json::to_string(&data) {
        Ok(json) => {
            debug!("Serialized game state ({} bytes).", json.len());
            Ok(json)
        }
        Err(e) => {
            error!("Failed to serialize game state: {}", e);
            Err(e)
        }
    }
}
