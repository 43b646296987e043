//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::{Card, CardColor, Suit};

/// カードの色 (赤か黒か)。
pub fn card_color(card: &Card) -> CardColor {
    CardColor::from_suit(card.suit)
}

/// そのスートのカードが積まれる組札 (Foundation) のインデックス (0-3)。
/// 約束事: 0: Club ♣️, 1: Diamond ♦️, 2: Heart ❤️, 3: Spade ♠️
pub fn foundation_index_for(suit: Suit) -> usize {
    suit.index()
}
