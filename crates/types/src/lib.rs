//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, score persistence).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MISMATCH_DELAY_MS` | 1000 | How long a mismatched selection stays visible |
//!
//! # Mode presets
//!
//! | Mode | Grid | Match size |
//! |------|------|------------|
//! | easy | 3x4 | 2 |
//! | medium | 4x4 | 2 |
//! | hard | 4x6 | 3 |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{GameConfig, TilePos};
//!
//! let config = GameConfig::new(2, 2, 2, "custom");
//! assert_eq!(config.tile_count(), 4);
//! assert_eq!(config.group_count(), 2);
//! assert_eq!(config.matrix_label(), "2x2");
//!
//! let preset = GameConfig::preset("hard").unwrap();
//! assert_eq!((preset.rows, preset.columns, preset.match_size), (4, 6, 3));
//!
//! assert_eq!(TilePos::new(1, 2).index(4), 6);
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay before a mismatched selection is turned face down again.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Largest board the engine accepts (rows * columns).
pub const MAX_TILES: u32 = 1024;

/// Collection key score records are appended under.
pub const SCORES_COLLECTION_KEY: &str = "@scores";

/// Longest player name the host accepts in the win prompt.
pub const MAX_NAME_LEN: usize = 24;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(MISMATCH_DELAY_MS, 1000);
        assert_eq!(SCORES_COLLECTION_KEY, "@scores");
    }

    #[test]
    fn presets_divide_evenly() {
        for name in GameConfig::PRESETS {
            let c = GameConfig::preset(name).unwrap();
            assert_eq!(c.tile_count() % c.match_size, 0, "{name}");
            assert_eq!(c.mode, *name);
        }
        assert!(GameConfig::preset("impossible").is_none());
    }

    #[test]
    fn tile_pos_index_is_row_major() {
        assert_eq!(TilePos::new(0, 0).index(3), 0);
        assert_eq!(TilePos::new(0, 2).index(3), 2);
        assert_eq!(TilePos::new(2, 1).index(3), 7);
        assert_eq!(TilePos::from_index(7, 3), TilePos::new(2, 1));
    }
}

/// Session parameters, fixed for the lifetime of a game.
///
/// The engine validates the combination when a game is created; this type
/// only carries the values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameConfig {
    pub rows: u32,
    pub columns: u32,
    /// Number of tiles sharing a value (2 = pairs, 3 = triples, ...).
    pub match_size: u32,
    /// Free-form label shown in the header.
    pub mode: String,
}

impl GameConfig {
    /// Names accepted by [`GameConfig::preset`].
    pub const PRESETS: &'static [&'static str] = &["easy", "medium", "hard"];

    pub fn new(rows: u32, columns: u32, match_size: u32, mode: impl Into<String>) -> Self {
        Self {
            rows,
            columns,
            match_size,
            mode: mode.into(),
        }
    }

    /// Look up a named preset (case-insensitive).
    pub fn preset(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        let (rows, columns, match_size) = match name.as_str() {
            "easy" => (3, 4, 2),
            "medium" => (4, 4, 2),
            "hard" => (4, 6, 3),
            _ => return None,
        };
        Some(Self::new(rows, columns, match_size, name))
    }

    pub fn tile_count(&self) -> u32 {
        self.rows.saturating_mul(self.columns)
    }

    /// Number of distinct values on a valid board.
    pub fn group_count(&self) -> u32 {
        if self.match_size == 0 {
            return 0;
        }
        self.tile_count() / self.match_size
    }

    /// `"<rows>x<columns>"`, the format stored in score records.
    pub fn matrix_label(&self) -> String {
        format!("{}x{}", self.rows, self.columns)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(4, 4, 2, "medium")
    }
}

/// Position of a tile on the board.
///
/// Coordinates: `row` ranges top to bottom, `column` left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    pub row: u32,
    pub column: u32,
}

impl TilePos {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Flat row-major index for a board `columns` wide.
    #[inline(always)]
    pub fn index(&self, columns: u32) -> usize {
        (self.row as usize) * (columns as usize) + (self.column as usize)
    }

    pub fn from_index(index: usize, columns: u32) -> Self {
        let columns = columns.max(1) as usize;
        Self {
            row: (index / columns) as u32,
            column: (index % columns) as u32,
        }
    }
}

/// Actions the host can feed to the game
///
/// Movement actions steer the host's cursor; `Flip` taps the tile under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move cursor one tile left
    MoveLeft,
    /// Move cursor one tile right
    MoveRight,
    /// Move cursor one tile up
    MoveUp,
    /// Move cursor one tile down
    MoveDown,
    /// Tap the tile under the cursor
    Flip,
    /// Deal a fresh board with the same configuration
    Reset,
}

/// How the resolver treated a single tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Tap on a locked or already selected tile; nothing changed.
    Ignored,
    /// Tile selected; the group is not complete yet.
    Selected,
    /// Group completed and locked.
    Matched { value: u32 },
    /// Values differ; the selection is turned face down after the delay.
    Mismatched,
}

impl TapOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TapOutcome::Ignored => "ignored",
            TapOutcome::Selected => "selected",
            TapOutcome::Matched { .. } => "matched",
            TapOutcome::Mismatched => "mismatched",
        }
    }
}
