// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! ここにあるのは全部「置けるか？」を答えるだけの純粋な関数。盤面は変えない。

pub mod common;
pub mod foundation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


pub use common::*;
pub use foundation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
