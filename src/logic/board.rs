// src/logic/board.rs
//! 盤面全体 (場札7列、組札4つ、山札、捨て札) をまとめて持つ構造体だよ！🃏
//!
//! カードは作られも消されもしない。山から山へ移動するだけ。
//! 盤面を書き換えるのは `app::event_handler` のイベント処理だけだよ。

use serde::Serialize;

use crate::components::card::{Card, Suit};
use crate::components::stack::{StackType, FOUNDATION_COUNT, TABLEAU_COLUMNS};
use crate::logic::rules;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    /// 場札。各列の末尾が一番上。
    pub tableau: [Vec<Card>; TABLEAU_COLUMNS],
    /// 組札。インデックスはスート番号 (`Suit::index`)。
    pub foundations: [Vec<Card>; FOUNDATION_COUNT],
    /// 山札。末尾から引く。
    pub stock: Vec<Card>,
    /// 捨て札。末尾が一番上。
    pub waste: Vec<Card>,
}

impl Board {
    /// 配り終わった場札と山札から盤面を作る。組札と捨て札は空。
    pub fn from_deal(tableau: [Vec<Card>; TABLEAU_COLUMNS], stock: Vec<Card>) -> Self {
        Self { tableau, stock, ..Default::default() }
    }

    /// 指定した置き場所のカード列。範囲外の番号なら None。
    pub fn pile(&self, stack: StackType) -> Option<&[Card]> {
        match stack {
            StackType::Tableau(i) => self.tableau.get(i as usize).map(Vec::as_slice),
            StackType::Foundation(i) => self.foundations.get(i as usize).map(Vec::as_slice),
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
        }
    }

    pub fn column(&self, column: usize) -> Option<&[Card]> {
        self.tableau.get(column).map(Vec::as_slice)
    }

    pub fn column_top(&self, column: usize) -> Option<&Card> {
        self.tableau.get(column).and_then(|c| c.last())
    }

    pub fn foundation_for(&self, suit: Suit) -> &[Card] {
        &self.foundations[suit.index()]
    }

    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// 山札から1枚引いて捨て札に置く。引けたら true。
    pub fn draw_from_stock(&mut self) -> bool {
        match self.stock.pop() {
            Some(card) => {
                self.waste.push(card);
                true
            }
            None => false,
        }
    }

    /// 山札が空の時に、捨て札を裏返して全部山札に戻す。戻したら true。
    pub fn recycle_waste(&mut self) -> bool {
        if !rules::can_reset_stock_from_waste(self.stock.is_empty(), self.waste.is_empty()) {
            return false;
        }
        self.stock.extend(self.waste.drain(..).rev());
        true
    }

    /// `from` 列の `start` 番目から上を、順番そのままで `to` 列の上に載せる。
    /// ルールは見ない (呼ぶ前に判定しておくこと)。動かしたら true。
    pub fn move_run(&mut self, from: usize, start: usize, to: usize) -> bool {
        if from == to || from >= TABLEAU_COLUMNS || to >= TABLEAU_COLUMNS {
            return false;
        }
        if start >= self.tableau[from].len() {
            return false;
        }
        let run = self.tableau[from].split_off(start);
        self.tableau[to].extend(run);
        true
    }

    /// 場札 `column` の一番上を、そのスートの組札に移す。ルールは見ない。
    pub fn move_column_top_to_foundation(&mut self, column: usize) -> Option<Card> {
        let card = self.tableau.get_mut(column)?.pop()?;
        self.foundations[card.suit.index()].push(card);
        Some(card)
    }

    /// 列のうち表向きに描く部分の開始インデックス。
    /// 末尾から続く一番長い「運べる山」の先頭だよ。一番上のカードは必ず表。
    /// 空の列なら 0。
    pub fn face_up_from(&self, column: usize) -> usize {
        let cards = match self.column(column) {
            Some(cards) if !cards.is_empty() => cards,
            _ => return 0,
        };
        (0..cards.len())
            .find(|&start| rules::is_draggable_run(&cards[start..]))
            .unwrap_or(cards.len() - 1)
    }

    /// 盤面にあるカード全部 (重複チェック用)。
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        StackType::all().filter_map(move |stack| self.pile(stack)).flatten()
    }

    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }

    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    /// 組札に52枚全部そろっていればクリア！🏆
    pub fn is_won(&self) -> bool {
        rules::check_win_condition(self.foundation_card_count())
    }
}
