// src/app/event_handler.rs
//! ポインタのイベントを受け取って盤面を動かす、インタラクションの状態機械だよ！🖱️
//!
//! 状態は `Idle` (何も持ってない) と `Dragging` (カードを運んでる) の2つだけ。
//! `handle_event` は (盤面, 状態, イベント) → 描画リクエスト の reducer なので、
//! ブラウザや時計がなくてもテストできる。

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::app::drag_handler;
use crate::app::layout_calculator::{BoardGeometry, HitRegion};
use crate::app::stock_handler;
use crate::components::{DraggingInfo, Position};
use crate::config::game_config::DEFAULT_DOUBLE_CLICK_THRESHOLD_MS;
use crate::logic::auto_move;
use crate::logic::Board;

/// 入力イベント。座標は Canvas 上のピクセル、時刻はミリ秒。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: f32, y: f32, timestamp_ms: u64 },
    Up { x: f32, y: f32 },
    Move { x: f32, y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DraggingInfo),
}

/// イベント処理のあとで描き直しが必要かどうか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderRequest {
    Skip,
    Redraw,
}

impl RenderRequest {
    fn from_changed(changed: bool) -> Self {
        if changed {
            RenderRequest::Redraw
        } else {
            RenderRequest::Skip
        }
    }
}

/// 盤面以外の、操作に関する状態。
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub state: InteractionState,
    /// 前回ポインタを押した時刻。まだ一度も押してなければ None。
    pub last_click_ms: Option<u64>,
    pub double_click_threshold_ms: u64,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_THRESHOLD_MS)
    }
}

impl Interaction {
    pub fn new(double_click_threshold_ms: u64) -> Self {
        Self { state: InteractionState::Idle, last_click_ms: None, double_click_threshold_ms }
    }

    /// ドラッグ中ならその情報。
    pub fn selection(&self) -> Option<&DraggingInfo> {
        match &self.state {
            InteractionState::Dragging(info) => Some(info),
            InteractionState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.selection().is_some()
    }

    fn is_double_click(&self, now_ms: u64) -> bool {
        self.last_click_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < self.double_click_threshold_ms)
    }
}

/// イベントを1つ最後まで処理する。途中の状態が外から見えることはないよ。
pub fn handle_event(
    board: &mut Board,
    interaction: &mut Interaction,
    event: PointerEvent,
    geometry: &impl BoardGeometry,
) -> RenderRequest {
    match event {
        PointerEvent::Down { x, y, timestamp_ms } => {
            handle_pointer_down(board, interaction, geometry, x, y, timestamp_ms)
        }
        PointerEvent::Up { x, .. } => handle_pointer_up(board, interaction, geometry, x),
        PointerEvent::Move { x, y } => handle_pointer_move(interaction, Position::new(x, y)),
    }
}

/// ポインタを押した時の処理。順番が大事！
///
/// 0. 離し損ねたドラッグが残っていたら捨てる (前回の up が届かなかった)。
/// 1. ダブルクリックなら、その列の一番上を組札へ (できれば)。
/// 2. 今回の時刻を記録。
/// 3. 山札 → めくる / 戻す。捨て札 → ドラッグ開始。
///    場札のカード → その列をスキャンしてドラッグ開始。
///
/// 1 で組札に送ったあとも 3 は同じイベントで走るよ。
fn handle_pointer_down(
    board: &mut Board,
    interaction: &mut Interaction,
    geometry: &impl BoardGeometry,
    x: f32,
    y: f32,
    timestamp_ms: u64,
) -> RenderRequest {
    let pointer = Position::new(x, y);
    let mut changed = false;

    if let InteractionState::Dragging(stale) = std::mem::take(&mut interaction.state) {
        warn!("Pointer down while still dragging {:?}; dropping the stale drag", stale.source);
        changed = true;
    }

    if interaction.is_double_click(timestamp_ms) {
        if let Some(column) = geometry.column_band(x) {
            debug!("Double click over Tableau({})", column);
            changed |= auto_move::auto_move_column_top(board, column).is_some();
        }
    }
    interaction.last_click_ms = Some(timestamp_ms);

    let grabbed = match geometry.hit_test(board, x, y) {
        Some(HitRegion::Stock) => {
            changed |= stock_handler::handle_stock_click(board);
            None
        }
        Some(HitRegion::Waste) => drag_handler::begin_waste_drag(board, geometry, pointer),
        Some(HitRegion::TableauCard { column, row }) => {
            drag_handler::begin_tableau_drag(board, geometry, column, row, pointer)
        }
        // 組札や、カードのない所を押しても何も始まらない
        Some(HitRegion::Foundation(_)) | Some(HitRegion::TableauColumnBand(_)) | None => None,
    };

    if let Some(info) = grabbed {
        interaction.state = InteractionState::Dragging(info);
        changed = true;
    }
    RenderRequest::from_changed(changed)
}

/// ポインタを離した時の処理。ドラッグ中でなければ何もしない。
/// ドロップできてもできなくても、ドラッグ状態は必ず解除するよ。
fn handle_pointer_up(
    board: &mut Board,
    interaction: &mut Interaction,
    geometry: &impl BoardGeometry,
    x: f32,
) -> RenderRequest {
    let InteractionState::Dragging(info) = std::mem::take(&mut interaction.state) else {
        return RenderRequest::Skip;
    };
    let moved = drag_handler::handle_drag_end(board, geometry, &info, x);
    info!("Pointer up: {:?} {}", info.source, if moved { "moved" } else { "snapped back" });
    RenderRequest::Redraw
}

fn handle_pointer_move(interaction: &mut Interaction, pointer: Position) -> RenderRequest {
    match &mut interaction.state {
        InteractionState::Dragging(info) => {
            drag_handler::update_dragged_position(info, pointer);
            RenderRequest::Redraw
        }
        InteractionState::Idle => RenderRequest::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::layout_calculator::TableLayout;
    use crate::components::{Card, DragSource, Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn down(x: f32, y: f32, timestamp_ms: u64) -> PointerEvent {
        PointerEvent::Down { x, y, timestamp_ms }
    }

    fn up(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Up { x, y }
    }

    const STOCK: (f32, f32) = (100.0, 650.0);
    const WASTE: (f32, f32) = (200.0, 650.0);

    /// 盤面と操作状態をまとめて持つテスト用の卓
    struct Table {
        board: Board,
        interaction: Interaction,
        layout: TableLayout,
    }

    impl Table {
        fn new(board: Board) -> Self {
            Self::with_threshold(board, DEFAULT_DOUBLE_CLICK_THRESHOLD_MS)
        }

        fn with_threshold(board: Board, threshold_ms: u64) -> Self {
            let interaction = Interaction::new(threshold_ms);
            Table { board, interaction, layout: TableLayout::default() }
        }

        fn send(&mut self, event: PointerEvent) -> RenderRequest {
            handle_event(&mut self.board, &mut self.interaction, event, &self.layout)
        }

        fn source(&self) -> Option<DragSource> {
            self.interaction.selection().map(|info| info.source)
        }
    }

    #[test]
    fn stock_click_draws_and_recycles() {
        let mut board = Board::default();
        board.stock = vec![card(Suit::Club, Rank::Five), card(Suit::Heart, Rank::Nine)];
        let mut table = Table::new(board);

        assert_eq!(table.send(down(STOCK.0, STOCK.1, 1_000)), RenderRequest::Redraw);
        assert_eq!(table.board.waste, vec![card(Suit::Heart, Rank::Nine)]);
        assert!(!table.interaction.is_dragging());

        table.send(down(STOCK.0, STOCK.1, 2_000));
        assert!(table.board.stock.is_empty());
        table.send(down(STOCK.0, STOCK.1, 3_000));
        assert!(table.board.waste.is_empty());
        assert_eq!(
            table.board.stock,
            vec![card(Suit::Club, Rank::Five), card(Suit::Heart, Rank::Nine)]
        );

        let mut empty = Table::new(Board::default());
        assert_eq!(empty.send(down(STOCK.0, STOCK.1, 9_000)), RenderRequest::Skip);
    }

    #[test]
    fn waste_drag_to_foundation() {
        let mut board = Board::default();
        board.waste = vec![card(Suit::Spade, Rank::Two)];
        let mut table = Table::new(board);

        table.send(down(WASTE.0, WASTE.1, 1_000));
        assert_eq!(table.source(), Some(DragSource::Waste));

        let moved = table.send(PointerEvent::Move { x: 880.0, y: 640.0 });
        assert_eq!(moved, RenderRequest::Redraw);
        let pointer = table.interaction.selection().map(|info| info.pointer);
        assert_eq!(pointer, Some(Position::new(880.0, 640.0)));

        table.send(up(880.0, 640.0));
        assert!(table.board.waste.is_empty());
        assert_eq!(table.board.foundations[3], vec![card(Suit::Spade, Rank::Two)]);
        assert_eq!(table.interaction.state, InteractionState::Idle);
    }

    #[test]
    fn empty_waste_click_starts_nothing() {
        let mut table = Table::new(Board::default());
        assert_eq!(table.send(down(WASTE.0, WASTE.1, 1_000)), RenderRequest::Skip);
        assert!(!table.interaction.is_dragging());
    }

    #[test]
    fn foundation_click_starts_nothing() {
        let mut board = Board::default();
        board.foundations[3] = vec![card(Suit::Spade, Rank::Two)];
        let mut table = Table::new(board);
        assert_eq!(table.send(down(900.0, 650.0, 1_000)), RenderRequest::Skip);
        assert!(!table.interaction.is_dragging());
    }

    #[test]
    fn stock_click_after_a_lost_pointer_up_does_not_carry_the_old_drag() {
        let mut board = Board::default();
        board.tableau[0] = vec![card(Suit::Diamond, Rank::Nine)];
        board.stock = vec![card(Suit::Spade, Rank::Eight)];
        board.waste = vec![card(Suit::Heart, Rank::Three)];
        let mut table = Table::new(board);

        // The release of this waste drag never arrives.
        table.send(down(WASTE.0, WASTE.1, 1_000));
        assert_eq!(table.source(), Some(DragSource::Waste));

        assert_eq!(table.send(down(STOCK.0, STOCK.1, 2_000)), RenderRequest::Redraw);
        assert!(!table.interaction.is_dragging());
        assert_eq!(table.send(up(STOCK.0, STOCK.1)), RenderRequest::Skip);

        // 8♠ was drawn onto the waste and stays there; column 0 is untouched.
        assert_eq!(table.board.tableau[0], vec![card(Suit::Diamond, Rank::Nine)]);
        assert_eq!(
            table.board.waste,
            vec![card(Suit::Heart, Rank::Three), card(Suit::Spade, Rank::Eight)]
        );
        assert!(table.board.stock.is_empty());
    }

    #[test]
    fn new_grab_replaces_a_stale_drag() {
        let mut board = Board::default();
        board.tableau[2] = vec![card(Suit::Club, Rank::Four)];
        board.waste = vec![card(Suit::Heart, Rank::Three)];
        let mut table = Table::new(board);

        table.send(down(WASTE.0, WASTE.1, 1_000));
        table.send(down(300.0, 160.0, 2_000));
        assert_eq!(table.source(), Some(DragSource::Tableau { column: 2, start_index: 0 }));
        assert_eq!(table.board.waste, vec![card(Suit::Heart, Rank::Three)]);
    }

    #[test]
    fn invalid_drop_restores_board_and_clears_selection() {
        let mut board = Board::default();
        board.tableau[0] = vec![card(Suit::Heart, Rank::Eight)];
        board.tableau[1] = vec![card(Suit::Diamond, Rank::Nine)];
        let before = board.clone();
        let mut table = Table::new(board);

        table.send(down(60.0, 160.0, 1_000));
        assert!(table.interaction.is_dragging());
        // 8♥ on 9♦: same colour
        assert_eq!(table.send(up(210.0, 400.0)), RenderRequest::Redraw);
        assert_eq!(table.board, before);
        assert!(!table.interaction.is_dragging());

        // Pointer up without a drag is ignored.
        assert_eq!(table.send(up(210.0, 400.0)), RenderRequest::Skip);
        assert_eq!(table.send(PointerEvent::Move { x: 1.0, y: 1.0 }), RenderRequest::Skip);
    }

    #[test]
    fn drop_target_ignores_vertical_position() {
        let mut board = Board::default();
        board.tableau[0] = vec![card(Suit::Club, Rank::Eight)];
        board.tableau[1] = vec![card(Suit::Diamond, Rank::Nine)];
        let mut table = Table::new(board);

        table.send(down(60.0, 160.0, 1_000));
        // Far below the column's cards, still inside its horizontal band.
        table.send(up(210.0, 760.0));
        assert!(table.board.tableau[0].is_empty());
        assert_eq!(
            table.board.tableau[1],
            vec![card(Suit::Diamond, Rank::Nine), card(Suit::Club, Rank::Eight)]
        );
    }

    #[test]
    fn double_click_sends_top_card_to_foundation() {
        let mut board = Board::default();
        board.tableau[2] = vec![card(Suit::Heart, Rank::King), card(Suit::Club, Rank::Two)];
        let mut table = Table::new(board);
        let x = 300.0;
        let y = 180.0; // over the 2♣

        table.send(down(x, y, 1_000));
        table.send(up(x, y));
        assert_eq!(table.board.tableau[2].len(), 2, "dropping on its own column changes nothing");

        table.send(down(x, y, 1_200));
        assert_eq!(table.board.foundations[0], vec![card(Suit::Club, Rank::Two)]);
        assert_eq!(table.board.tableau[2], vec![card(Suit::Heart, Rank::King)]);
        // The same event still goes through the normal scan: the K♥ is now the top card.
        assert_eq!(table.source(), Some(DragSource::Tableau { column: 2, start_index: 0 }));
    }

    #[test]
    fn slow_second_click_is_not_a_double_click() {
        let mut board = Board::default();
        board.tableau[2] = vec![card(Suit::Club, Rank::Two)];
        let mut table = Table::new(board);

        table.send(down(300.0, 160.0, 1_000));
        table.send(up(300.0, 160.0));
        table.send(down(300.0, 160.0, 1_300));
        assert!(table.board.foundations[0].is_empty(), "300 ms is not below the threshold");
        // ... but the card can still be dragged by hand.
        assert!(table.interaction.is_dragging());
    }

    #[test]
    fn first_click_is_never_a_double_click() {
        let mut board = Board::default();
        board.tableau[2] = vec![card(Suit::Club, Rank::Two)];
        let mut table = Table::new(board);

        table.send(down(300.0, 160.0, 0));
        assert!(table.board.foundations[0].is_empty());
        assert_eq!(table.interaction.last_click_ms, Some(0));
    }

    #[test]
    fn double_click_threshold_is_configurable() {
        let mut board = Board::default();
        board.tableau[2] = vec![card(Suit::Club, Rank::Two)];
        let mut table = Table::with_threshold(board, 500);

        table.send(down(300.0, 160.0, 1_000));
        table.send(up(300.0, 160.0));
        table.send(down(300.0, 160.0, 1_450));
        assert_eq!(table.board.foundations[0], vec![card(Suit::Club, Rank::Two)]);
    }
}
