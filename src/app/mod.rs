// src/app/mod.rs
//! 盤面の操作 (ヒット判定、ドラッグ、山札クリック) と、ブラウザ側のつなぎ込み。
//! `game_app` / `browser_event_manager` / `renderer` 以外は web_sys に触らないよ。

pub mod browser_event_manager;
pub mod console_logger;
pub mod drag_handler;
pub mod event_handler;
pub mod game_app;
pub mod game_session;
pub mod init_handler;
pub mod layout_calculator;
pub mod renderer;
pub mod state_getter;
pub mod stock_handler;
