// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::position::Position;

/// ドラッグ元だよ！🖱️ 場札の途中から下の山ごと、または捨て札の一番上の1枚。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    /// 場札 `column` 列目の `start_index` 番目から上 (末尾) まで全部。
    Tableau { column: usize, start_index: usize },
    /// 捨て札の一番上のカード。
    Waste,
}

/// ドラッグ中の情報。ポインタを押してから離すまでの間だけ存在するよ。
///
/// 運んでいるカードそのものは持たない！場札なら `tableau[column][start_index..]`、
/// 捨て札なら `waste` の一番上を、離した瞬間にもう一度読むんだ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DraggingInfo {
    pub source: DragSource,
    /// ドラッグ開始時のマウスとカード左上のオフセット
    pub offset: Position,
    /// 最後に分かっているポインタの位置 (描画用)
    pub pointer: Position,
}

impl DraggingInfo {
    pub fn new(source: DragSource, pointer: Position, anchor: Position) -> Self {
        Self { source, offset: pointer.offset_from(anchor), pointer }
    }

    /// 運んでいるカードの左上の位置 (一番下のカード)。
    pub fn card_origin(&self) -> Position {
        self.pointer.offset_from(self.offset)
    }
}
