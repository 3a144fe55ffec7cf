//! Game state module - board, selection and the match resolver
//!
//! Each accepted tap is resolved against the current selection:
//!
//! - empty selection: the tile is turned face up
//! - every selected value matches and the group is complete: the group locks
//! - every selected value matches, group incomplete: the selection grows
//! - any value differs: the selection stays visible for
//!   [`MISMATCH_DELAY_MS`](crate::types::MISMATCH_DELAY_MS), then turns face down
//!
//! The face-down step is a countdown advanced by [`GameState::tick`]. It
//! remembers exactly which tiles it will hide and the epoch it was scheduled
//! in. A tap on another tile before it fires applies it immediately, so a
//! late clear can never hide tiles that were selected afterwards.

use log::{debug, info};

use crate::board::{validate_config, Board};
use crate::error::{EngineError, Result};
use crate::rng::SimpleRng;
use crate::scoring::{apply_refund, TAP_COST};
use crate::snapshot::GameSnapshot;
use crate::types::{GameConfig, TapOutcome, TilePos, MISMATCH_DELAY_MS};

/// Mismatched tiles waiting to be turned face down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingClear {
    /// Prior selection plus the tile that broke it.
    pub tiles: Vec<TilePos>,
    pub remaining_ms: u32,
    /// Resolution epoch the clear was scheduled in.
    pub epoch: u64,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    /// Face-up, unlocked tiles in tap order.
    selection: Vec<TilePos>,
    pending_clear: Option<PendingClear>,
    locked_count: u32,
    score: u32,
    /// Accepted taps this episode (score before refunds).
    taps: u32,
    /// Bumped on every accepted tap.
    epoch: u64,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    seed: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Validate `config` and deal the first board from `seed`.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self> {
        validate_config(&config)?;
        let mut rng = SimpleRng::new(seed);
        let board = Board::generate(&config, &mut rng)?;
        info!(
            "dealt {} board, match size {}, seed {}",
            config.matrix_label(),
            config.match_size,
            seed
        );

        Ok(Self {
            config,
            board,
            selection: Vec::new(),
            pending_clear: None,
            locked_count: 0,
            score: 0,
            taps: 0,
            epoch: 0,
            episode_id: 0,
            seed,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &[TilePos] {
        &self.selection
    }

    pub fn pending_clear(&self) -> Option<&PendingClear> {
        self.pending_clear.as_ref()
    }

    pub fn locked_count(&self) -> u32 {
        self.locked_count
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn taps(&self) -> u32 {
        self.taps
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Seed the session was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// All tiles locked.
    pub fn is_won(&self) -> bool {
        self.locked_count == self.config.tile_count()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Deal a fresh board with the same configuration.
    ///
    /// The RNG keeps running, so the new board is a new permutation.
    pub fn reset(&mut self) {
        // Config was validated in `new`.
        self.board = Board::deal(&self.config, &mut self.rng);
        self.selection.clear();
        self.pending_clear = None;
        self.locked_count = 0;
        self.score = 0;
        self.taps = 0;
        self.epoch = self.epoch.wrapping_add(1);
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("reset: episode {}", self.episode_id);
    }

    /// Tap the tile at `pos`, checking that the caller saw the same value.
    pub fn tap_checked(&mut self, pos: TilePos, value: u32) -> Result<TapOutcome> {
        let tile = self
            .board
            .get(pos)
            .ok_or(EngineError::InvalidTileReference {
                row: pos.row,
                column: pos.column,
            })?;
        if tile.value != value {
            return Err(EngineError::TileValueMismatch {
                row: pos.row,
                column: pos.column,
                expected: value,
                actual: tile.value,
            });
        }
        self.tap(pos)
    }

    /// Tap the tile at `pos` and resolve it against the selection.
    pub fn tap(&mut self, pos: TilePos) -> Result<TapOutcome> {
        let tile = *self
            .board
            .get(pos)
            .ok_or(EngineError::InvalidTileReference {
                row: pos.row,
                column: pos.column,
            })?;

        if tile.locked || tile.selected {
            debug!("tap {},{} ignored", pos.row, pos.column);
            return Ok(TapOutcome::Ignored);
        }

        // A new resolution supersedes any clear still counting down.
        self.flush_pending_clear();

        self.score += TAP_COST;
        self.taps += 1;
        self.epoch = self.epoch.wrapping_add(1);

        let outcome = self.resolve(pos, tile.value);
        debug!(
            "tap {},{} value {} -> {} (score {}, locked {})",
            pos.row,
            pos.column,
            tile.value,
            outcome.as_str(),
            self.score,
            self.locked_count
        );
        if self.is_won() {
            info!("board cleared with score {}", self.score);
        }
        Ok(outcome)
    }

    fn resolve(&mut self, pos: TilePos, value: u32) -> TapOutcome {
        let match_size = self.config.match_size as usize;
        let all_match = self
            .selection
            .iter()
            .filter_map(|p| self.board.get(*p))
            .all(|t| t.value == value);

        if !all_match {
            self.set_selected(pos, true);
            self.selection.push(pos);
            self.pending_clear = Some(PendingClear {
                tiles: self.selection.clone(),
                remaining_ms: MISMATCH_DELAY_MS,
                epoch: self.epoch,
            });
            return TapOutcome::Mismatched;
        }

        if self.selection.len() + 1 == match_size {
            let group: Vec<TilePos> = self.selection.drain(..).chain(Some(pos)).collect();
            for p in group {
                if let Some(tile) = self.board.get_mut(p) {
                    tile.selected = false;
                    tile.locked = true;
                }
            }
            self.locked_count += self.config.match_size;
            self.score = apply_refund(self.score, self.config.match_size);
            return TapOutcome::Matched { value };
        }

        self.set_selected(pos, true);
        self.selection.push(pos);
        TapOutcome::Selected
    }

    fn set_selected(&mut self, pos: TilePos, selected: bool) {
        if let Some(tile) = self.board.get_mut(pos) {
            tile.selected = selected;
        }
    }

    /// Advance the mismatch countdown. Returns true when tiles were turned
    /// face down.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(pending) = self.pending_clear.as_mut() else {
            return false;
        };

        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            return false;
        }

        self.flush_pending_clear()
    }

    /// Apply a pending clear now, regardless of time left.
    ///
    /// Returns true when tiles were turned face down. Every accepted tap
    /// flushes before bumping the epoch and reset drops the clear, so a
    /// pending clear always belongs to the current epoch.
    pub fn flush_pending_clear(&mut self) -> bool {
        let Some(pending) = self.pending_clear.take() else {
            return false;
        };
        debug_assert_eq!(pending.epoch, self.epoch, "pending clear outlived its epoch");

        for pos in &pending.tiles {
            if let Some(tile) = self.board.get_mut(*pos) {
                if !tile.locked {
                    tile.selected = false;
                }
            }
        }
        self.selection.retain(|p| !pending.tiles.contains(p));
        debug!("cleared {} mismatched tiles", pending.tiles.len());
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        if out.config != self.config {
            out.config = self.config.clone();
        }
        out.board = self.board.clone();
        out.selection.clear();
        out.selection.extend_from_slice(&self.selection);
        out.pending_clear_ms = self.pending_clear.as_ref().map(|p| p.remaining_ms);
        out.locked_count = self.locked_count;
        out.score = self.score;
        out.taps = self.taps;
        out.epoch = self.epoch;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.won = self.is_won();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::empty(self.config.clone());
        self.snapshot_into(&mut s);
        s
    }
}
