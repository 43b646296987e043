// src/logic/auto_move.rs
//! カードの自動移動 (ダブルクリックで組札へ) に関するロジックだよ！🪄

use log::info;

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::logic::board::Board;
use crate::logic::rules;

/// カードが今の盤面で自動的に移動できる組札を探す。
/// 組札はスートごとに決まっているので、候補はそのスートの1つだけ。
pub fn find_automatic_foundation_move(board: &Board, card: &Card) -> Option<StackType> {
    let index = rules::foundation_index_for(card.suit);
    if rules::can_place_on_foundation(card, &board.foundations[index]) {
        Some(StackType::Foundation(index as u8))
    } else {
        None
    }
}

/// 場札 `column` の一番上のカードを、置けるなら組札へ移す。
/// 移したカードを返す。列が空か、置けなければ None で盤面はそのまま。
pub fn auto_move_column_top(board: &mut Board, column: usize) -> Option<Card> {
    let top = *board.column_top(column)?;
    find_automatic_foundation_move(board, &top)?;
    let moved = board.move_column_top_to_foundation(column)?;
    info!("[AutoMove] {} moved from Tableau({}) to its foundation", moved, column);
    Some(moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn test_find_automatic_foundation_move() {
        let mut board = Board::default();
        let two_hearts = Card::new(Suit::Heart, Rank::Two);
        let three_hearts = Card::new(Suit::Heart, Rank::Three);
        let two_spades = Card::new(Suit::Spade, Rank::Two);

        let target = |board: &Board, card: &Card| find_automatic_foundation_move(board, card);
        assert_eq!(target(&board, &two_hearts), Some(StackType::Foundation(2)));
        assert_eq!(target(&board, &two_spades), Some(StackType::Foundation(3)));
        assert_eq!(target(&board, &three_hearts), None);

        board.foundations[2].push(two_hearts);
        assert_eq!(target(&board, &three_hearts), Some(StackType::Foundation(2)));
    }

    #[test]
    fn test_auto_move_column_top() {
        let mut board = Board::default();
        board.tableau[4] =
            vec![Card::new(Suit::Diamond, Rank::Nine), Card::new(Suit::Club, Rank::Two)];

        assert_eq!(auto_move_column_top(&mut board, 4), Some(Card::new(Suit::Club, Rank::Two)));
        assert_eq!(board.tableau[4], vec![Card::new(Suit::Diamond, Rank::Nine)]);
        assert_eq!(board.foundations[0], vec![Card::new(Suit::Club, Rank::Two)]);

        let before = board.clone();
        assert_eq!(auto_move_column_top(&mut board, 4), None, "9♦ は組札に置けない");
        assert_eq!(auto_move_column_top(&mut board, 0), None, "空の列");
        assert_eq!(auto_move_column_top(&mut board, 99), None, "範囲外の列");
        assert_eq!(board, before);
    }
}
