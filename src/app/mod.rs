// src/app/mod.rs
//! Presentation-facing layer: the wasm entry point plus the small handlers it
//! delegates to. The engine itself lives in `crate::game`.

pub mod event_handler;
pub mod game_app;
pub mod state_getter;
pub mod stock_handler;
