// src/components/position.rs

use serde::{Deserialize, Serialize};

/// 2D空間での位置を表すよ！ (x, y) 座標。📍
/// 画面の左上が原点で、y は下に向かって増える。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `self - other`。ポインタとカード左上のオフセットを出すのに使うよ。
    pub fn offset_from(self, other: Position) -> Position {
        Position { x: self.x - other.x, y: self.y - other.y }
    }
}

/// カード1枚ぶんの当たり判定の矩形。
/// 境界線上もヒット扱い (`<=`) にしてるよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.contains_x(x) && self.y <= y && y <= self.y + self.height
    }

    /// 横方向だけの判定。ドロップ先の列を決める時は縦を見ないからね。
    pub fn contains_x(&self, x: f32) -> bool {
        self.x <= x && x <= self.x + self.width
    }
}
