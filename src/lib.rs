// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;

pub use app::event_handler::{
    handle_event, Interaction, InteractionState, PointerEvent, RenderRequest,
};
pub use app::game_app::GameApp;
pub use app::game_session::GameSession;
pub use app::layout_calculator::{BoardGeometry, HitRegion, TableLayout};
pub use app::state_getter::BoardSnapshot;
pub use components::{Card, DragSource, DraggingInfo, Rank, Suit};
pub use config::GameConfig;
pub use error::GameError;
pub use logic::Board;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    app::console_logger::init(log::LevelFilter::Info);
    log::info!("klondike_wasm loaded");
}
