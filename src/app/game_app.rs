// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::app::{event_handler, state_getter, stock_handler};
use crate::components::stack::StackType;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::game::Solitaire;
use crate::protocol::{Command, MoveResult};

// --- JS 側から触るアプリ本体 ---
// 盤面の持ち主は Solitaire で、ここは JSON の出し入れをするだけ。
// 返り値は全部 MoveResult の JSON 文字列にそろえてあるよ。
#[wasm_bindgen]
pub struct SolitaireApp {
    game: Solitaire,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// `config_json` を省略するとデフォルト設定で配る。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SolitaireApp, JsValue> {
        Self::from_config_json(config_json.as_deref()).map_err(|e| {
            error!("SolitaireApp: {}", e);
            JsValue::from_str(&e.to_string())
        })
    }

    /// 山札クリック。
    pub fn draw_stock(&mut self) -> String {
        respond(stock_handler::handle_stock_click(&mut self.game))
    }

    /// `{"Tableau": 3}` や `"Waste"` みたいな StackType の JSON を受け取る。
    pub fn select_source(&mut self, source_json: &str) -> String {
        self.run_with_stack(source_json, |source| Command::SelectSource { source })
    }

    pub fn select_run(&mut self, source_json: &str, count: usize) -> String {
        self.run_with_stack(source_json, |source| Command::SelectRun { source, count })
    }

    pub fn request_move(&mut self, target_json: &str) -> String {
        self.run_with_stack(target_json, |target| Command::RequestMove { target })
    }

    /// ダブルクリック用。
    pub fn auto_move(&mut self, source_json: &str) -> String {
        self.run_with_stack(source_json, |source| Command::AutoMove { source })
    }

    pub fn deselect(&mut self) {
        self.game.deselect();
    }

    pub fn move_tableau_to_tableau(&mut self, from: usize, to: usize, count: usize) -> String {
        respond(MoveResult::from(self.game.move_tableau_to_tableau(from, to, count)))
    }

    pub fn move_tableau_to_foundation(&mut self, from: usize, to: usize) -> String {
        respond(MoveResult::from(self.game.move_tableau_to_foundation(from, to)))
    }

    pub fn move_waste_to_tableau(&mut self, to: usize) -> String {
        respond(MoveResult::from(self.game.move_waste_to_tableau(to)))
    }

    pub fn move_waste_to_foundation(&mut self, to: usize) -> String {
        respond(MoveResult::from(self.game.move_waste_to_foundation(to)))
    }

    pub fn move_foundation_to_tableau(&mut self, from: usize, to: usize) -> String {
        respond(MoveResult::from(self.game.move_foundation_to_tableau(from, to)))
    }

    /// 戻せたら true。
    pub fn undo(&mut self) -> bool {
        self.game.undo()
    }

    pub fn reset_game(&mut self) {
        self.game.reset_game();
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    pub fn undo_depth(&self) -> usize {
        self.game.undo_depth()
    }

    /// 描画用の盤面 JSON。
    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.game).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `{"type": "DrawStock"}` みたいなコマンド JSON をまとめて受け付ける入口。
    pub fn apply_command(&mut self, command_json: &str) -> String {
        match serde_json::from_str::<Command>(command_json) {
            Ok(command) => respond(event_handler::apply_command(&mut self.game, command)),
            Err(e) => {
                warn!("SolitaireApp: could not parse command {}: {}", command_json, e);
                respond(MoveResult::rejected("invalid command", e.to_string()))
            }
        }
    }
}

// --- ここから下は JsValue を使わないので native のテストからも呼べる ---
impl SolitaireApp {
    pub fn from_config_json(config_json: Option<&str>) -> Result<Self, ConfigError> {
        let config = match config_json {
            Some(json) if !json.trim().is_empty() => GameConfig::from_json(json)?,
            _ => GameConfig::default(),
        };
        info!("SolitaireApp: starting new game with {:?}", config);
        Ok(Self { game: Solitaire::with_config(config) })
    }

    pub fn game(&self) -> &Solitaire {
        &self.game
    }

    fn run_with_stack(&mut self, stack_json: &str, make: impl FnOnce(StackType) -> Command) -> String {
        match serde_json::from_str::<StackType>(stack_json) {
            Ok(stack) => respond(event_handler::apply_command(&mut self.game, make(stack))),
            Err(e) => {
                warn!("SolitaireApp: could not parse pile {}: {}", stack_json, e);
                respond(MoveResult::rejected("invalid pile", e.to_string()))
            }
        }
    }
}

fn respond(result: MoveResult) -> String {
    serde_json::to_string(&result).unwrap_or_else(|e| {
        error!("SolitaireApp: failed to serialize result: {}", e);
        r#"{"accepted":false,"reason":"internal error","detail":null}"#.to_string()
    })
}
