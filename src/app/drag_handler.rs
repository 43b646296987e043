// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end).

use log::{debug, info};

use crate::app::layout_calculator::BoardGeometry;
use crate::components::{Card, DragSource, DraggingInfo, Position, StackType};
use crate::logic::rules;
use crate::logic::Board;

/// Starts dragging the top card of the Waste pile, if there is one.
pub fn begin_waste_drag(
    board: &Board,
    geometry: &impl BoardGeometry,
    pointer: Position,
) -> Option<DraggingInfo> {
    // 捨て札が空なら運ぶものがない
    let top = board.waste_top()?;
    let anchor = geometry.pile_rect(StackType::Waste).origin();
    info!("Drag start: Waste top {}", top);
    Some(DraggingInfo::new(DragSource::Waste, pointer, anchor))
}

/// Starts a tableau drag from a `HitRegion::TableauCard { column, row }` hit.
///
/// `top_row` is the topmost card under the pointer. The rows below it that are
/// also under the pointer are tried from the bottom card up; the first one whose
/// suffix is a draggable run is grabbed together with everything above it.
pub fn begin_tableau_drag(
    board: &Board,
    geometry: &impl BoardGeometry,
    column: usize,
    top_row: usize,
    pointer: Position,
) -> Option<DraggingInfo> {
    let cards = board.column(column)?;
    for row in 0..cards.len().min(top_row + 1) {
        let rect = geometry.card_rect(column, row);
        // カードが重なっているので、ポインタの下にある行だけ見る
        if !rect.contains(pointer.x, pointer.y) {
            continue;
        }
        if rules::is_draggable_run(&cards[row..]) {
            let count = cards.len() - row;
            info!("Drag start: Tableau({}) from row {} ({} cards)", column, row, count);
            let source = DragSource::Tableau { column, start_index: row };
            return Some(DraggingInfo::new(source, pointer, rect.origin()));
        }
        debug!("  Tableau({}) row {} is under the pointer but not a run", column, row);
    }
    None
}

/// Follows the pointer while dragging.
pub fn update_dragged_position(info: &mut DraggingInfo, pointer: Position) {
    info.pointer = pointer;
}

/// The cards currently carried by `info`, read live from the board.
pub fn dragged_cards<'a>(board: &'a Board, info: &DraggingInfo) -> &'a [Card] {
    match info.source {
        DragSource::Tableau { column, start_index } => board
            .column(column)
            .and_then(|cards| cards.get(start_index..))
            .unwrap_or(&[]),
        // 捨て札は一番上の1枚だけ
        DragSource::Waste => board.waste.last().map(std::slice::from_ref).unwrap_or(&[]),
    }
}

/// Drops the dragged cards at `x`. Only the horizontal position picks the
/// target column. Returns true if the board changed.
pub fn handle_drag_end(
    board: &mut Board,
    geometry: &impl BoardGeometry,
    info: &DraggingInfo,
    x: f32,
) -> bool {
    // 縦の位置は見ない！列の帯に入っていればその列がドロップ先
    let target = geometry.column_band(x);
    debug!("Drag end: {:?} dropped over column {:?}", info.source, target);
    match info.source {
        DragSource::Tableau { column, start_index } => {
            drop_tableau_run(board, column, start_index, target)
        }
        DragSource::Waste => drop_waste_card(board, target),
    }
}

fn drop_tableau_run(
    board: &mut Board,
    from: usize,
    start_index: usize,
    target: Option<usize>,
) -> bool {
    let Some(to) = target else {
        info!("  No target column. Run stays on Tableau({})", from);
        return false;
    };
    // 自分の列に戻しただけなら何もしない
    if to == from {
        return false;
    }
    // 運んでいる山の一番下のカードで判定する
    let Some(first) = board.column(from).and_then(|cards| cards.get(start_index)).copied() else {
        return false;
    };
    let allowed = match board.column_top(to) {
        Some(target_top) => rules::can_stack(target_top, &first),
        None => rules::can_place_on_empty_column(&first),
    };
    if !allowed {
        info!("  {} cannot go on Tableau({}). Run stays.", first, to);
        return false;
    }
    let moved = board.move_run(from, start_index, to);
    if moved {
        info!("  Moved run starting at {} from Tableau({}) to Tableau({})", first, from, to);
    }
    moved
}

fn drop_waste_card(board: &mut Board, target: Option<usize>) -> bool {
    // いったん捨て札から取り出して、置けなかったら最後に戻す
    let Some(card) = board.waste.pop() else {
        return false;
    };
    match target {
        // どの列の上でもない → 組札に置けるか試す
        None => {
            let foundation = &mut board.foundations[rules::foundation_index_for(card.suit)];
            if rules::can_place_on_foundation(&card, foundation) {
                foundation.push(card);
                info!("  {} moved from Waste to its foundation", card);
                return true;
            }
        }
        Some(to) => {
            let Some(column) = board.tableau.get_mut(to) else {
                board.waste.push(card);
                return false;
            };
            let allowed = match column.last() {
                Some(target_top) => rules::can_stack(target_top, &card),
                None => rules::can_place_on_empty_column(&card),
            };
            if allowed {
                column.push(card);
                info!("  {} moved from Waste to Tableau({})", card, to);
                return true;
            }
        }
    }
    info!("  {} returns to Waste", card);
    board.waste.push(card);
    false
}
