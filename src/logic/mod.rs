// src/logic/mod.rs
//! ゲームのルールと盤面。ブラウザには依存しないよ。

pub mod auto_move;
pub mod board;
pub mod deck;
pub mod rules;

pub use board::Board;
