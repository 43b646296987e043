// src/logic/deck.rs

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::stack::TABLEAU_COLUMNS;
use crate::logic::board::Board;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
/// スート順 (♣ ♦ ♥ ♠)、その中はランク順 (2 ... A) に並ぶ。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。乱数生成器は呼び出し側から渡す。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シャッフル済みのデッキを場札と山札に配る。
///
/// デッキの末尾から1枚ずつ取って、0列目に1枚、1列目に2枚、... 6列目に7枚
/// (列ごとに順番に)。残った24枚がそのままの順番で山札になるよ。
pub fn deal_from_deck(mut deck: Vec<Card>) -> Board {
    let mut tableau: [Vec<Card>; TABLEAU_COLUMNS] = Default::default();
    for (column_index, column) in tableau.iter_mut().enumerate() {
        for _ in 0..=column_index {
            if let Some(card) = deck.pop() {
                column.push(card);
            }
        }
    }
    debug!("Dealt tableau, {} cards left for the stock", deck.len());
    Board::from_deal(tableau, deck)
}

/// 新しいゲームの盤面を作る！デッキを作ってシャッフルして配る。🎲
pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);
    deal_from_deck(deck)
}
