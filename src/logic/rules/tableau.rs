//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;

use crate::components::card::{Card, Rank};
use super::common::card_color;

/// `upper` を `lower` の上に直接重ねられるかチェックする。
///
/// `lower` のランクが `upper` のちょうど1つ上で、色が違えば OK。
/// (下から読むと、ランクが1ずつ下がって色が交互になる)
pub fn can_stack(lower: &Card, upper: &Card) -> bool {
    lower.rank.is_one_above(upper.rank) && card_color(lower) != card_color(upper)
}

/// 空の列に置けるのは一番高いランク (`A`) だけ！
pub fn can_place_on_empty_column(card: &Card) -> bool {
    card.rank == Rank::HIGHEST
}

/// カード列がまとめて運べる「山 (run)」かチェックする。
///
/// 隣り合うペア `(a, b)` (b が a の上) が全部 `can_stack(a, b)` を満たせば OK。
/// 1枚だけなら常に OK、空っぽは運ぶものがないので NG。
pub fn is_draggable_run(cards: &[Card]) -> bool {
    !cards.is_empty() && cards.iter().tuple_windows().all(|(lower, upper)| can_stack(lower, upper))
}
