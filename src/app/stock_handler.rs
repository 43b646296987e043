// src/app/stock_handler.rs
//! Handles clicking the Stock pile (dealing to Waste, resetting Waste).

use log::info;

use crate::logic::rules::stock_waste;
use crate::logic::Board;

/// Deals one card from Stock to Waste, or turns Waste back into Stock when
/// Stock has run out. Returns true if the board changed.
pub fn handle_stock_click(board: &mut Board) -> bool {
    if stock_waste::can_deal_from_stock(board.stock.is_empty()) {
        let dealt = board.draw_from_stock();
        info!("Dealt {:?} from Stock to Waste", board.waste_top());
        dealt
    } else if board.recycle_waste() {
        info!("Reset {} cards from Waste to Stock", board.stock.len());
        true
    } else {
        info!("Stock and Waste are both empty, nothing to do");
        false
    }
}
