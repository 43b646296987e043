// src/app/init_handler.rs
//! GameApp の初期化まわり。Canvas の取得と、セッションのロック。

use std::sync::{Arc, Mutex, MutexGuard};

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::game_session::GameSession;
use crate::config::GameConfig;
use crate::error::GameError;

/// id で Canvas を探して 2D コンテキストを取る。Canvas の大きさは設定に合わせるよ。
pub fn initialize_canvas(
    canvas_id: &str,
    config: &GameConfig,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), GameError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| GameError::Dom("no window or document".to_string()))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| GameError::Dom(format!("element #{} not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GameError::Dom(format!("#{} is not a canvas", canvas_id)))?;

    canvas.set_width(config.screen_width as u32);
    canvas.set_height(config.screen_height as u32);

    let context = canvas
        .get_context("2d")
        .map_err(|e| GameError::Dom(format!("get_context failed: {:?}", e)))?
        .ok_or_else(|| GameError::Dom("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GameError::Dom("context is not a CanvasRenderingContext2d".to_string()))?;

    info!("Canvas #{} ready ({}x{})", canvas_id, canvas.width(), canvas.height());
    Ok((canvas, context))
}

/// セッションをロックする。ポイズンしてても中身は使えるので取り出して続けるよ。
pub fn lock_session(session: &Arc<Mutex<GameSession>>) -> MutexGuard<'_, GameSession> {
    match session.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("Session mutex was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}
