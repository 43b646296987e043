// src/config/game_config.rs
//! 実行時に変えられるゲーム設定だよ。JS から JSON で渡せる！

use serde::{Deserialize, Serialize};

use crate::components::stack::TABLEAU_COLUMNS;
use crate::config::layout::{
    CARD_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, STOCK_POS_Y, TABLEAU_START_X, TABLEAU_X_OFFSET,
};
use crate::error::GameError;

/// ダブルクリックとみなす間隔 (ミリ秒) のデフォルト値。
pub const DEFAULT_DOUBLE_CLICK_THRESHOLD_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 前回のクリックからこの時間未満ならダブルクリック扱い
    pub double_click_threshold_ms: u64,
    pub screen_width: f32,
    pub screen_height: f32,
    /// 指定すると毎回同じ配り方になる (デバッグ用)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            double_click_threshold_ms: DEFAULT_DOUBLE_CLICK_THRESHOLD_MS,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読むよ。書いてない項目はデフォルト値になる。
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.double_click_threshold_ms == 0 {
            return Err(GameError::InvalidConfig(
                "double_click_threshold_ms must be greater than 0".to_string(),
            ));
        }
        let min_width = TABLEAU_START_X + TABLEAU_X_OFFSET * TABLEAU_COLUMNS as f32;
        if self.screen_width < min_width {
            return Err(GameError::InvalidConfig(format!(
                "screen_width {} is narrower than the tableau ({})",
                self.screen_width, min_width
            )));
        }
        let min_height = STOCK_POS_Y + CARD_HEIGHT;
        if self.screen_height < min_height {
            return Err(GameError::InvalidConfig(format!(
                "screen_height {} cannot fit the stock row ({})",
                self.screen_height, min_height
            )));
        }
        Ok(())
    }
}
