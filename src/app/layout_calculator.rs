// src/app/layout_calculator.rs
//! Maps board piles to screen rectangles and screen points back to board regions.

use serde::Serialize;

use crate::components::{Rect, StackType, FOUNDATION_COUNT, TABLEAU_COLUMNS};
use crate::config::layout::{
    CARD_HEIGHT, CARD_WIDTH, FOUNDATION_MARGIN_BOTTOM, FOUNDATION_MARGIN_RIGHT, SCREEN_HEIGHT,
    SCREEN_WIDTH, STOCK_POS_X, STOCK_POS_Y, TABLEAU_START_X, TABLEAU_START_Y, TABLEAU_X_OFFSET,
    TABLEAU_Y_OFFSET, WASTE_POS_X, WASTE_POS_Y,
};
use crate::config::GameConfig;
use crate::logic::Board;

/// What a screen point lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HitRegion {
    Stock,
    Waste,
    Foundation(usize),
    /// `row` is the topmost card of `column` under the point.
    TableauCard { column: usize, row: usize },
    /// Inside a column's horizontal band but not on any of its cards.
    TableauColumnBand(usize),
}

/// The board-to-screen mapping the interaction logic hit-tests against.
///
/// Implementors only describe where things are; the provided methods do the
/// hit-testing.
pub trait BoardGeometry {
    /// Slot of a pile. For a tableau column this is the slot of its bottom card.
    fn pile_rect(&self, pile: StackType) -> Rect;

    /// Where the card at `row` of tableau `column` is drawn.
    fn card_rect(&self, column: usize, row: usize) -> Rect;

    /// The column whose horizontal band contains `x`. Vertical position is ignored.
    fn column_band(&self, x: f32) -> Option<usize> {
        (0..TABLEAU_COLUMNS).find(|&c| self.pile_rect(StackType::Tableau(c as u8)).contains_x(x))
    }

    /// 山札 → 捨て札 → 場札のカード → 組札 → 列の帯、の順に調べる。
    fn hit_test(&self, board: &Board, x: f32, y: f32) -> Option<HitRegion> {
        if self.pile_rect(StackType::Stock).contains(x, y) {
            return Some(HitRegion::Stock);
        }
        if self.pile_rect(StackType::Waste).contains(x, y) {
            return Some(HitRegion::Waste);
        }
        let column = self.column_band(x);
        if let Some(column) = column {
            let len = board.column(column).map_or(0, |cards| cards.len());
            // 後ろの行ほど上に描かれるので、末尾から探す
            let topmost = (0..len).rev().find(|&row| self.card_rect(column, row).contains(x, y));
            if let Some(row) = topmost {
                return Some(HitRegion::TableauCard { column, row });
            }
        }
        // 長い列のカードは組札の枠に重なることがある。カードの方が上に描かれるから先に見る
        let foundation = (0..FOUNDATION_COUNT)
            .find(|&i| self.pile_rect(StackType::Foundation(i as u8)).contains(x, y));
        if let Some(i) = foundation {
            return Some(HitRegion::Foundation(i));
        }
        column.map(HitRegion::TableauColumnBand)
    }
}

/// The classic fixed layout: tableau across the top, stock and waste bottom-left,
/// foundations bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self { screen_width: SCREEN_WIDTH, screen_height: SCREEN_HEIGHT }
    }
}

impl TableLayout {
    pub fn from_config(config: &GameConfig) -> Self {
        Self { screen_width: config.screen_width, screen_height: config.screen_height }
    }

    fn card_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, CARD_WIDTH, CARD_HEIGHT)
    }

    // 組札は右下から左へ、スート順に並べる
    fn foundation_x(&self, index: usize) -> f32 {
        self.screen_width
            - (FOUNDATION_COUNT - index) as f32 * TABLEAU_X_OFFSET
            - FOUNDATION_MARGIN_RIGHT
    }
}

impl BoardGeometry for TableLayout {
    fn pile_rect(&self, pile: StackType) -> Rect {
        match pile {
            StackType::Stock => Self::card_at(STOCK_POS_X, STOCK_POS_Y),
            StackType::Waste => Self::card_at(WASTE_POS_X, WASTE_POS_Y),
            StackType::Foundation(index) => Self::card_at(
                self.foundation_x(index as usize),
                self.screen_height - CARD_HEIGHT - FOUNDATION_MARGIN_BOTTOM,
            ),
            StackType::Tableau(index) => self.card_rect(index as usize, 0),
        }
    }

    fn card_rect(&self, column: usize, row: usize) -> Rect {
        // 列は横に 110px、行は縦に 20px ずつずらす
        Self::card_at(
            TABLEAU_START_X + column as f32 * TABLEAU_X_OFFSET,
            TABLEAU_START_Y + row as f32 * TABLEAU_Y_OFFSET,
        )
    }
}
