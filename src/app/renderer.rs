// src/app/renderer.rs
//! GameApp の描画関連ロジック。スナップショットを Canvas に描くだけで、盤面には触らない。

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::game_session::GameSession;
use crate::app::layout_calculator::BoardGeometry;
use crate::app::state_getter::BoardSnapshot;
use crate::components::{Card, CardColor, Position, Rect, StackType, ALL_SUITS};
use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH, TABLEAU_Y_OFFSET};

const FELT_COLOR: &str = "#0b6623";
const SLOT_COLOR: &str = "rgba(255, 255, 255, 0.35)";
const CARD_FACE_COLOR: &str = "#ffffff";
const CARD_BACK_COLOR: &str = "#1e3a8a";
const CARD_EDGE_COLOR: &str = "#333333";
const RED_INK: &str = "#c8102e";
const BLACK_INK: &str = "#111111";

/// セッションの今の状態を Canvas 全体に描く。
pub fn render_session(
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    session: &GameSession,
) -> Result<(), JsValue> {
    let (width, height) = (canvas.width() as f64, canvas.height() as f64);
    render(context, &session.layout, &session.snapshot(), width, height)
}

/// 1フレーム分を描く。描く順番: 背景 → 空き枠 → 山札/捨て札 → 組札 → 場札 → ドラッグ中のカード。
pub fn render(
    context: &CanvasRenderingContext2d,
    geometry: &impl BoardGeometry,
    snapshot: &BoardSnapshot,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<(), JsValue> {
    context.clear_rect(0.0, 0.0, canvas_width, canvas_height);
    context.set_fill_style_str(FELT_COLOR);
    context.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    // --- 山札と捨て札 ---
    let stock_rect = geometry.pile_rect(StackType::Stock);
    if snapshot.stock_count > 0 {
        draw_card_back(context, stock_rect);
    } else {
        draw_slot(context, stock_rect);
    }

    let waste_rect = geometry.pile_rect(StackType::Waste);
    let visible_waste = if snapshot.waste_top_hidden {
        snapshot.waste.len().saturating_sub(1)
    } else {
        snapshot.waste.len()
    };
    match visible_waste.checked_sub(1).and_then(|i| snapshot.waste.get(i)) {
        Some(card) => draw_card_face(context, waste_rect, card)?,
        None => draw_slot(context, waste_rect),
    }

    // --- 組札 (スートのマークを薄く出しておく) ---
    for (index, pile) in snapshot.foundations.iter().enumerate() {
        let rect = geometry.pile_rect(StackType::Foundation(index as u8));
        match pile.last() {
            Some(card) => draw_card_face(context, rect, card)?,
            None => {
                draw_slot(context, rect);
                if let Some(suit) = ALL_SUITS.get(index) {
                    context.set_fill_style_str(SLOT_COLOR);
                    context.set_font("48px sans-serif");
                    context.fill_text(suit.symbol(), rect.x as f64 + 30.0, rect.y as f64 + 85.0)?;
                }
            }
        }
    }

    // --- 場札 ---
    for (column, col) in snapshot.tableau.iter().enumerate() {
        if col.cards.is_empty() {
            draw_slot(context, geometry.card_rect(column, 0));
            continue;
        }
        let visible = col.hidden_from.unwrap_or(col.cards.len());
        for (row, card) in col.cards.iter().enumerate().take(visible) {
            let rect = geometry.card_rect(column, row);
            if row >= col.face_up_from {
                draw_card_face(context, rect, card)?;
            } else {
                draw_card_back(context, rect);
            }
        }
    }

    // --- ドラッグ中のカードは一番上に ---
    if let Some(drag) = &snapshot.drag {
        let origin = drag.origin;
        for (i, card) in drag.cards.iter().enumerate() {
            let at = Position::new(origin.x, origin.y + i as f32 * TABLEAU_Y_OFFSET);
            draw_card_face(context, Rect::new(at.x, at.y, CARD_WIDTH, CARD_HEIGHT), card)?;
        }
        debug!("Rendered {} dragged cards at {:?}", drag.cards.len(), origin);
    }

    if snapshot.is_won {
        context.set_fill_style_str(CARD_FACE_COLOR);
        context.set_font("64px sans-serif");
        context.fill_text("You win!", canvas_width / 2.0 - 140.0, canvas_height / 2.0)?;
    }
    Ok(())
}

fn draw_slot(context: &CanvasRenderingContext2d, rect: Rect) {
    context.set_stroke_style_str(SLOT_COLOR);
    context.set_line_width(2.0);
    context.stroke_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
}

fn draw_card_back(context: &CanvasRenderingContext2d, rect: Rect) {
    context.set_fill_style_str(CARD_BACK_COLOR);
    context.fill_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    draw_edge(context, rect);
}

fn draw_card_face(
    context: &CanvasRenderingContext2d,
    rect: Rect,
    card: &Card,
) -> Result<(), JsValue> {
    context.set_fill_style_str(CARD_FACE_COLOR);
    context.fill_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
    draw_edge(context, rect);

    let ink = match card.color() {
        CardColor::Red => RED_INK,
        CardColor::Black => BLACK_INK,
    };
    context.set_fill_style_str(ink);
    // 場札は 20px ずつしかずれないので、左上の隅に収まるように書く
    context.set_font("16px sans-serif");
    context.fill_text(&card.to_string(), rect.x as f64 + 6.0, rect.y as f64 + 16.0)?;
    context.set_font("40px sans-serif");
    context.fill_text(card.suit.symbol(), rect.x as f64 + 34.0, rect.y as f64 + 90.0)?;
    Ok(())
}

fn draw_edge(context: &CanvasRenderingContext2d, rect: Rect) {
    context.set_stroke_style_str(CARD_EDGE_COLOR);
    context.set_line_width(1.0);
    context.stroke_rect(rect.x as f64, rect.y as f64, rect.width as f64, rect.height as f64);
}
