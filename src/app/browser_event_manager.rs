// src/app/browser_event_manager.rs
//! Attaches the mouse listeners that feed the session: mousedown on the canvas,
//! mouseup and mousemove on the window.

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window,
};

use crate::app::event_handler::{PointerEvent, RenderRequest};
use crate::app::game_session::GameSession;
use crate::app::init_handler::lock_session;
use crate::app::renderer;

/// Where a listener was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListenerTarget {
    Canvas,
    Window,
}

/// Attached listeners, kept alive together with their target and event name.
pub(crate) type ListenerList = Vec<(ListenerTarget, &'static str, Closure<dyn FnMut(Event)>)>;

/// Converts viewport coordinates into canvas pixels, accounting for CSS scaling.
pub(crate) fn to_canvas_coords(
    canvas: &HtmlCanvasElement,
    client_x: i32,
    client_y: i32,
) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    // CSS で拡大縮小されていても、Canvas のピクセルに直す
    let scale_x = if rect.width() > 0.0 { canvas.width() as f64 / rect.width() } else { 1.0 };
    let scale_y = if rect.height() > 0.0 { canvas.height() as f64 / rect.height() } else { 1.0 };
    (
        ((client_x as f64 - rect.left()) * scale_x) as f32,
        ((client_y as f64 - rect.top()) * scale_y) as f32,
    )
}

/// Feeds one event into the session and redraws if asked to.
/// The lock is held for the transition and the redraw together.
pub(crate) fn dispatch(
    session: &Arc<Mutex<GameSession>>,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    event: PointerEvent,
) -> RenderRequest {
    let mut session = lock_session(session);
    let request = session.handle_event(event);
    if request == RenderRequest::Redraw {
        if let Err(e) = renderer::render_session(canvas, context, &session) {
            error!("Render after {:?} failed: {:?}", event, e);
        }
    }
    request
}

fn browser_window() -> Result<Window, JsValue> {
    window().ok_or_else(|| JsValue::from_str("Failed to get window"))
}

fn event_target<'a>(
    target: ListenerTarget,
    canvas: &'a HtmlCanvasElement,
    window: &'a Window,
) -> &'a EventTarget {
    match target {
        ListenerTarget::Canvas => canvas.as_ref(),
        ListenerTarget::Window => window.as_ref(),
    }
}

/// Attaches the three listeners. The closures are pushed into `closures`
/// so they live as long as the app does.
pub(crate) fn attach_pointer_listeners(
    session: &Arc<Mutex<GameSession>>,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    closures: &Arc<Mutex<ListenerList>>,
) -> Result<(), JsValue> {
    let window = browser_window()?;
    // 押すのは Canvas の上だけ。離す・動かすは Canvas の外に出ても拾えるように window で聞く
    let kinds: [(ListenerTarget, &'static str, fn(f32, f32) -> PointerEvent); 3] = [
        (ListenerTarget::Canvas, "mousedown", |x, y| PointerEvent::Down {
            x,
            y,
            timestamp_ms: js_sys::Date::now() as u64,
        }),
        (ListenerTarget::Window, "mouseup", |x, y| PointerEvent::Up { x, y }),
        (ListenerTarget::Window, "mousemove", |x, y| PointerEvent::Move { x, y }),
    ];

    let mut stored = closures
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock closure list: {}", e)))?;

    for (target, name, make_event) in kinds {
        let session = Arc::clone(session);
        let canvas_for_closure = canvas.clone();
        let context = context.clone();

        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
                error!("Failed to cast event to MouseEvent in {} listener", name);
                return;
            };
            let (x, y) = to_canvas_coords(
                &canvas_for_closure,
                mouse_event.client_x(),
                mouse_event.client_y(),
            );
            dispatch(&session, &canvas_for_closure, &context, make_event(x, y));
        }) as Box<dyn FnMut(Event)>);

        event_target(target, canvas, &window)
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        debug!("Attached {} listener to {:?}", name, target);
        stored.push((target, name, closure));
    }
    Ok(())
}

/// Removes every listener attached by `attach_pointer_listeners`.
pub(crate) fn detach_pointer_listeners(
    canvas: &HtmlCanvasElement,
    closures: &Arc<Mutex<ListenerList>>,
) -> Result<(), JsValue> {
    let mut stored = closures
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock closure list: {}", e)))?;
    if stored.is_empty() {
        return Ok(());
    }
    let window = browser_window()?;
    // 付けた先から外さないと window 側のリスナーが残ってしまう
    for (target, name, closure) in stored.drain(..) {
        event_target(target, canvas, &window)
            .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
    }
    Ok(())
}
