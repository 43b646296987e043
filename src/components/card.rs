// src/components/card.rs

use serde::{Deserialize, Serialize};

/// カードのスート（マーク）だよ！♣️♦️❤️♠️
///
/// 並び順はそのまま組札 (Foundation) のインデックスになるよ。
/// 0: Club, 1: Diamond, 2: Heart, 3: Spade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,    // ♣️
    Diamond, // ♦️
    Heart,   // ❤️
    Spade,   // ♠️
}

/// カードのランク（数字）だよ！
///
/// ⚠️ このゲームでは `2` が一番低くて、`A` が一番高い！ (K の次が A)
/// 判別値を明示しておいて、`PartialOrd`/`Ord` の大小比較がそのまま
/// 「ランク順」になるようにしてるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace, // 一番上！
}

/// 全スートの配列。デッキを作る時とかに使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// 全ランクの配列 (ランク順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Suit {
    /// スートの番号 (0-3)。組札のインデックスと同じだよ。
    pub fn index(self) -> usize {
        self as usize
    }

    /// 番号からスートに戻す。範囲外なら None！
    pub fn from_index(index: usize) -> Option<Suit> {
        ALL_SUITS.get(index).copied()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Club => "♣",
            Suit::Diamond => "♦",
            Suit::Heart => "♥",
            Suit::Spade => "♠",
        }
    }
}

impl Rank {
    /// ランク順での位置 (Two = 0, ..., Ace = 12)。
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// 一番低いランク (`2`)。空の組札に置けるのはこれだけ。
    pub const LOWEST: Rank = Rank::Two;
    /// 一番高いランク (`A`)。空の場札の列に置けるのはこれだけ。
    pub const HIGHEST: Rank = Rank::Ace;

    /// `self` がランク順でちょうど `other` の1つ上なら true。
    pub fn is_one_above(self, other: Rank) -> bool {
        self.ordinal() == other.ordinal() + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// カードの色（赤か黒か）だよ。❤️🖤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// カードそのもの！🃏 スートとランクの組み合わせで、52枚全部が区別できる。
///
/// 表向き/裏向きは持たないよ。場札での表裏は山の並び方から毎回計算するからね。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn color(&self) -> CardColor {
        CardColor::from_suit(self.suit)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
