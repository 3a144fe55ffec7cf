//! Render-facing copy of the game state.
//!
//! The board inside shares storage with the live game until the next
//! transition writes to it, so taking a snapshot every frame is cheap.

use crate::board::Board;
use crate::types::{GameConfig, TilePos};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub board: Board,
    /// Face-up, unlocked tiles in tap order.
    pub selection: Vec<TilePos>,
    /// Time left before a mismatched selection is hidden.
    pub pending_clear_ms: Option<u32>,
    pub locked_count: u32,
    pub score: u32,
    pub taps: u32,
    pub epoch: u64,
    pub episode_id: u32,
    pub seed: u32,
    pub won: bool,
}

impl GameSnapshot {
    /// Blank snapshot for `config` with an empty (all group 0) board.
    pub fn empty(config: GameConfig) -> Self {
        let board = Board::from_values(config.rows, config.columns, &[]);
        Self {
            config,
            board,
            selection: Vec::new(),
            pending_clear_ms: None,
            locked_count: 0,
            score: 0,
            taps: 0,
            epoch: 0,
            episode_id: 0,
            seed: 0,
            won: false,
        }
    }

    pub fn tile_count(&self) -> u32 {
        self.config.tile_count()
    }

    /// Groups found so far.
    pub fn groups_found(&self) -> u32 {
        if self.config.match_size == 0 {
            return 0;
        }
        self.locked_count / self.config.match_size
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::empty(GameConfig::default())
    }
}
