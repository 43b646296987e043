// src/app/state_getter.rs
//! Builds a render-ready snapshot of the board and converts it to JSON.

use log::{debug, error};
use serde::Serialize;

use crate::app::drag_handler;
use crate::app::event_handler::Interaction;
use crate::components::{Card, DragSource, Position};
use crate::error::GameError;
use crate::logic::Board;

/// One tableau column as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSnapshot {
    pub cards: Vec<Card>,
    /// Cards from this index up are drawn face up.
    pub face_up_from: usize,
    /// Cards from this index up are being dragged and are not drawn in place.
    pub hidden_from: Option<usize>,
}

/// What is currently following the pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragPayload {
    pub cards: Vec<Card>,
    pub source: DragSource,
    /// Top-left corner of the first carried card.
    pub origin: Position,
    pub offset: Position,
    pub pointer: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub tableau: Vec<ColumnSnapshot>,
    pub foundations: Vec<Vec<Card>>,
    pub stock_count: usize,
    pub waste: Vec<Card>,
    /// The top waste card is being dragged.
    pub waste_top_hidden: bool,
    pub drag: Option<DragPayload>,
    pub is_won: bool,
}

pub fn snapshot(board: &Board, interaction: &Interaction) -> BoardSnapshot {
    let selection = interaction.selection();
    let source = selection.map(|info| info.source);

    let tableau = board
        .tableau
        .iter()
        .enumerate()
        .map(|(column, cards)| ColumnSnapshot {
            cards: cards.clone(),
            face_up_from: board.face_up_from(column),
            // 運んでいる途中のカードは元の場所には描かない
            hidden_from: match source {
                Some(DragSource::Tableau { column: c, start_index }) if c == column => {
                    Some(start_index)
                }
                _ => None,
            },
        })
        .collect();

    // カードはドラッグ情報には入っていないので、盤面から読み直す
    let drag = selection.map(|info| DragPayload {
        cards: drag_handler::dragged_cards(board, info).to_vec(),
        source: info.source,
        origin: info.card_origin(),
        offset: info.offset,
        pointer: info.pointer,
    });

    BoardSnapshot {
        tableau,
        foundations: board.foundations.to_vec(),
        stock_count: board.stock.len(),
        waste: board.waste.clone(),
        waste_top_hidden: matches!(source, Some(DragSource::Waste)),
        drag,
        is_won: board.is_won(),
    }
}

/// スナップショットを JSON 文字列にする (JS 側のデバッグ表示用)。
pub fn snapshot_json(board: &Board, interaction: &Interaction) -> Result<String, GameError> {
    let snapshot = snapshot(board, interaction);
    match serde_json::to_string(&snapshot) {
        Ok(json) => {
            debug!("Serialized board snapshot ({} bytes)", json.len());
            Ok(json)
        }
        Err(e) => {
            error!("Failed to serialize board snapshot: {}", e);
            Err(GameError::from(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event_handler::InteractionState;
    use crate::components::{DraggingInfo, Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn board() -> Board {
        let mut board = Board::default();
        board.tableau[0] = vec![
            card(Suit::Club, Rank::Two),
            card(Suit::Heart, Rank::Nine),
            card(Suit::Spade, Rank::Eight),
        ];
        board.stock = vec![card(Suit::Diamond, Rank::Five); 3];
        board.waste = vec![card(Suit::Heart, Rank::Ace)];
        board
    }

    #[test]
    fn idle_snapshot() {
        let snap = snapshot(&board(), &Interaction::default());
        assert_eq!(snap.tableau.len(), 7);
        assert_eq!(snap.tableau[0].face_up_from, 1);
        assert_eq!(snap.tableau[0].hidden_from, None);
        assert_eq!(snap.tableau[3].face_up_from, 0);
        assert_eq!(snap.foundations.len(), 4);
        assert_eq!(snap.stock_count, 3);
        assert!(!snap.waste_top_hidden);
        assert_eq!(snap.drag, None);
        assert!(!snap.is_won);
    }

    #[test]
    fn dragging_snapshot_hides_origin() {
        let board = board();
        let mut interaction = Interaction::default();
        interaction.state = InteractionState::Dragging(DraggingInfo::new(
            DragSource::Tableau { column: 0, start_index: 1 },
            Position::new(60.0, 180.0),
            Position::new(50.0, 170.0),
        ));

        let snap = snapshot(&board, &interaction);
        assert_eq!(snap.tableau[0].hidden_from, Some(1));
        let drag = snap.drag.unwrap();
        assert_eq!(drag.cards, vec![card(Suit::Heart, Rank::Nine), card(Suit::Spade, Rank::Eight)]);
        assert_eq!(drag.offset, Position::new(10.0, 10.0));
        assert_eq!(drag.origin, Position::new(50.0, 170.0));

        interaction.state = InteractionState::Dragging(DraggingInfo::new(
            DragSource::Waste,
            Position::new(170.0, 610.0),
            Position::new(160.0, 600.0),
        ));
        let snap = snapshot(&board, &interaction);
        assert!(snap.waste_top_hidden);
        assert_eq!(snap.drag.unwrap().cards, vec![card(Suit::Heart, Rank::Ace)]);
    }

    #[test]
    fn json_has_expected_fields() {
        let json = snapshot_json(&board(), &Interaction::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stock_count"], 3);
        assert_eq!(value["tableau"][0]["face_up_from"], 1);
        assert_eq!(value["waste"][0]["suit"], "Heart");
        assert!(value["drag"].is_null());
    }
}
