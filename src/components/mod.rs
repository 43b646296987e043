// src/components/mod.rs

pub mod card;
pub mod dragging_info;
pub mod position;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use dragging_info::{DragSource, DraggingInfo};
pub use position::{Position, Rect};
pub use stack::{StackType, FOUNDATION_COUNT, TABLEAU_COLUMNS};
