// src/app/game_session.rs
//! 盤面 + 操作状態 + レイアウトをひとまとめにしたもの。
//! ブラウザ側はこれを Arc<Mutex<>> で持って、イベントを流し込むだけ！

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::event_handler::{self, Interaction, PointerEvent, RenderRequest};
use crate::app::layout_calculator::TableLayout;
use crate::app::state_getter::{self, BoardSnapshot};
use crate::config::GameConfig;
use crate::logic::{deck, Board};

#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    pub interaction: Interaction,
    pub layout: TableLayout,
    config: GameConfig,
    /// seed を指定した時だけ使う乱数。続けて new_game しても別の配りになる。
    seeded_rng: Option<StdRng>,
}

impl GameSession {
    /// 設定に従って新しいゲームを配る。
    pub fn new(config: GameConfig) -> Self {
        let seeded_rng = config.seed.map(StdRng::seed_from_u64);
        let mut session = Self {
            board: Board::default(),
            interaction: Interaction::new(config.double_click_threshold_ms),
            layout: TableLayout::from_config(&config),
            config,
            seeded_rng,
        };
        session.new_game();
        session
    }

    /// 決まった盤面から始める (テストやデバッグ用)。
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        Self {
            board,
            interaction: Interaction::new(config.double_click_threshold_ms),
            layout: TableLayout::from_config(&config),
            config,
            seeded_rng: None,
        }
    }

    /// シャッフルして配り直す。ドラッグ中だったら捨てるよ。
    pub fn new_game(&mut self) {
        self.board = match self.seeded_rng.as_mut() {
            Some(rng) => deck::deal(rng),
            None => deck::deal(&mut rand::thread_rng()),
        };
        self.interaction = Interaction::new(self.config.double_click_threshold_ms);
        info!("New game dealt: {} cards in stock", self.board.stock.len());
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> RenderRequest {
        event_handler::handle_event(&mut self.board, &mut self.interaction, event, &self.layout)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        state_getter::snapshot(&self.board, &self.interaction)
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }
}
