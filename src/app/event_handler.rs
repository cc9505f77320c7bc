// src/app/event_handler.rs
//! Turns presentation-layer commands into engine calls.

use log::{debug, info};

use crate::app::stock_handler;
use crate::components::stack::StackType;
use crate::game::Solitaire;
use crate::protocol::{Command, MoveResult};

/// Applies one command to the game. Exactly one engine operation per command.
pub fn apply_command(game: &mut Solitaire, command: Command) -> MoveResult {
    debug!("Applying command: {:?}", command);
    match command {
        Command::DrawStock => stock_handler::handle_stock_click(game),
        Command::SelectSource { source } => selection_result(game.select_source(source).is_some(), source),
        Command::SelectRun { source, count } => {
            selection_result(game.select_run(source, count).is_some(), source)
        }
        Command::RequestMove { target } => MoveResult::from(game.request_move(target)),
        Command::Deselect => {
            game.deselect();
            MoveResult::accepted()
        }
        Command::AutoMove { source } => match game.auto_move_to_foundation(source) {
            Ok(index) => MoveResult::accepted_with(format!("foundation {}", index)),
            Err(err) => MoveResult::from(&err),
        },
        Command::Undo => {
            if game.undo() {
                MoveResult::accepted()
            } else {
                MoveResult::accepted_with("nothing to undo")
            }
        }
        Command::ResetGame => {
            game.reset_game();
            info!("New game dealt from command.");
            MoveResult::accepted()
        }
    }
}

fn selection_result(selected: bool, source: StackType) -> MoveResult {
    if selected {
        MoveResult::accepted()
    } else {
        MoveResult::rejected("not selectable", format!("nothing to pick up from {}", source))
    }
}
