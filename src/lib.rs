// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // JS から触る入口
pub mod components; // カード・山などのデータ部品
pub mod config; // 設定とルール定数
pub mod error;
pub mod game; // エンジン本体と undo 履歴
pub mod logic; // ルール判定とデッキ操作
pub mod protocol; // プレゼン層とやり取りする JSON の形

pub use app::game_app::SolitaireApp;
pub use components::{Card, GameStatus, Pile, Rank, SelectionHandle, StackType, Suit};
pub use config::GameConfig;
pub use error::{ConfigError, MoveError, Violation};
pub use game::{DrawOutcome, Piles, Solitaire};
pub use protocol::{Command, GameStateData, MoveResult};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
// パニックしたときにブラウザのコンソールにちゃんとメッセージが出るようにする。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log::info!("Panic hook set!");
}
