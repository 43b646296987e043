// src/error.rs
//! ゲームの外側 (設定の読み込み、DOM、JSON) で起きるエラーだよ。
//! ルール判定そのものはエラーを出さない！置けなければ何もしないだけ。

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum GameError {
    /// 設定値がおかしい
    InvalidConfig(String),
    /// JSON への変換 / JSON からの変換に失敗
    Serialization(serde_json::Error),
    /// Canvas やウィンドウが取れなかった
    Dom(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            GameError::Serialization(e) => write!(f, "serialization failed: {}", e),
            GameError::Dom(msg) => write!(f, "dom error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Serialization(e)
    }
}

// wasm の公開メソッドは Result<_, JsValue> を返すので、その変換。
impl From<GameError> for JsValue {
    fn from(e: GameError) -> Self {
        JsValue::from(js_sys::Error::new(&e.to_string()))
    }
}
