//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};

/// 指定されたカードが、組札 `foundation` の一番上に置けるかチェックする。
///
/// - 空の組札: 一番低いランク (`2`) だけ置ける。
/// - それ以外: スートが同じで、ランクが一番上のカードのちょうど1つ上。
pub fn can_place_on_foundation(card: &Card, foundation: &[Card]) -> bool {
    let result = match foundation.last() {
        None => card.rank == Rank::LOWEST,
        Some(top) => card.suit == top.suit && card.rank.is_one_above(top.rank),
    };
    trace!("[Foundation Rule] {} onto {:?}: {}", card, foundation.last(), result);
    result
}
