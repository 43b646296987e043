// src/app/game_app.rs

use std::sync::{Arc, Mutex};

use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::browser_event_manager::{self, ListenerList};
use crate::app::event_handler::{PointerEvent, RenderRequest};
use crate::app::game_session::GameSession;
use crate::app::init_handler::{self, lock_session};
use crate::app::{renderer, state_getter};
use crate::config::GameConfig;

// --- ブラウザ側から使うゲーム本体 ---
#[wasm_bindgen]
pub struct GameApp {
    session: Arc<Mutex<GameSession>>,
    // リスナーのクロージャは、ここで持っておかないと drop されて JS から呼べなくなる
    event_closures: Arc<Mutex<ListenerList>>,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl GameApp {
    /// デフォルト設定で、id が `canvas_id` の Canvas にゲームを作る。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<GameApp, JsValue> {
        Self::build(canvas_id, GameConfig::default())
    }

    /// JSON の設定付きで作る。例: `{"double_click_threshold_ms": 400, "seed": 42}`
    pub fn with_config(canvas_id: &str, config_json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(config_json)?;
        Self::build(canvas_id, config)
    }

    /// 配り直して描き直す。
    pub fn new_game(&self) -> Result<(), JsValue> {
        let mut session = lock_session(&self.session);
        session.new_game();
        renderer::render_session(&self.canvas, &self.context, &session)
    }

    /// JS 側で座標を計算済みの時用。リスナーを付けた場合は呼ばなくていいよ。
    /// 戻り値は描き直したかどうか。
    pub fn pointer_down(&self, x: f32, y: f32, timestamp_ms: f64) -> bool {
        self.dispatch(PointerEvent::Down { x, y, timestamp_ms: timestamp_ms.max(0.0) as u64 })
    }

    pub fn pointer_up(&self, x: f32, y: f32) -> bool {
        self.dispatch(PointerEvent::Up { x, y })
    }

    pub fn pointer_move(&self, x: f32, y: f32) -> bool {
        self.dispatch(PointerEvent::Move { x, y })
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let session = lock_session(&self.session);
        renderer::render_session(&self.canvas, &self.context, &session)
    }

    /// 今の盤面を JSON で返す (デバッグ用)。
    pub fn state_json(&self) -> Result<String, JsValue> {
        let session = lock_session(&self.session);
        Ok(state_getter::snapshot_json(&session.board, &session.interaction)?)
    }

    pub fn is_won(&self) -> bool {
        lock_session(&self.session).is_won()
    }

    /// マウスのリスナーを付ける (mousedown は Canvas、mouseup と mousemove は window)。
    /// 何回呼んでも付くのは1組だけ。
    pub fn attach_listeners(&self) -> Result<(), JsValue> {
        browser_event_manager::detach_pointer_listeners(&self.canvas, &self.event_closures)?;
        browser_event_manager::attach_pointer_listeners(
            &self.session,
            &self.canvas,
            &self.context,
            &self.event_closures,
        )?;
        info!("GameApp: listeners attached");
        Ok(())
    }

    pub fn detach_listeners(&self) -> Result<(), JsValue> {
        browser_event_manager::detach_pointer_listeners(&self.canvas, &self.event_closures)
    }
}

impl GameApp {
    fn build(canvas_id: &str, config: GameConfig) -> Result<GameApp, JsValue> {
        info!("GameApp: initializing on #{}", canvas_id);
        let (canvas, context) = init_handler::initialize_canvas(canvas_id, &config)?;
        let session = GameSession::new(config);
        renderer::render_session(&canvas, &context, &session)?;
        Ok(GameApp {
            session: Arc::new(Mutex::new(session)),
            event_closures: Arc::new(Mutex::new(Vec::new())),
            canvas,
            context,
        })
    }

    fn dispatch(&self, event: PointerEvent) -> bool {
        let request =
            browser_event_manager::dispatch(&self.session, &self.canvas, &self.context, event);
        request == RenderRequest::Redraw
    }
}

impl Drop for GameApp {
    fn drop(&mut self) {
        let detached =
            browser_event_manager::detach_pointer_listeners(&self.canvas, &self.event_closures);
        if let Err(e) = detached {
            error!("GameApp: failed to detach listeners on drop: {:?}", e);
        }
    }
}
