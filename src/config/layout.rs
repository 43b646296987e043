// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードやスタックの座標、オフセットなど。すべて Canvas 上のピクセル単位。

pub const SCREEN_WIDTH: f32 = 1024.0; // 画面の幅
pub const SCREEN_HEIGHT: f32 = 768.0; // 画面の高さ

pub const CARD_WIDTH: f32 = 100.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 140.0; // カード画像の高さ
pub const CARD_SPACING_X: f32 = 10.0; // カード間の水平方向の間隔

// --- 各エリアの開始位置 ---
pub const STOCK_POS_X: f32 = 50.0; // 山札のX座標
pub const STOCK_POS_Y: f32 = 600.0; // 山札のY座標

pub const WASTE_POS_X: f32 = 160.0; // 捨て札置き場のX座標
pub const WASTE_POS_Y: f32 = 600.0; // 捨て札置き場のY座標

pub const FOUNDATION_MARGIN_RIGHT: f32 = 50.0; // 組札の右端の余白
pub const FOUNDATION_MARGIN_BOTTOM: f32 = 20.0; // 組札の下の余白

pub const TABLEAU_START_X: f32 = 50.0; // 場札 (Tableau) の開始X座標
pub const TABLEAU_START_Y: f32 = 150.0; // 場札の開始Y座標
pub const TABLEAU_X_OFFSET: f32 = CARD_WIDTH + CARD_SPACING_X; // 場札の列間のX方向の間隔
pub const TABLEAU_Y_OFFSET: f32 = 20.0; // 場札のカードのY方向オフセット (表も裏も同じ)
