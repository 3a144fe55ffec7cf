//! Board module - manages the tile grid
//!
//! The board is a `rows x columns` grid of tiles stored row-major in a flat
//! vector. The vector sits behind an `Arc` and is copied on first write, so a
//! snapshot handed to the renderer stays unchanged while the game moves on.
//! Coordinates: (row, column), row 0 is the top, column 0 the left edge.

use std::sync::Arc;

use crate::error::{EngineError, Result};
use crate::rng::{shuffled_deck, SimpleRng};
use crate::types::{GameConfig, TilePos, MAX_TILES};

/// One face-down card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub row: u32,
    pub column: u32,
    /// Match group this tile belongs to.
    pub value: u32,
    /// Face up, waiting for the group to resolve.
    pub selected: bool,
    /// Group found; terminal.
    pub locked: bool,
}

impl Tile {
    pub const fn new(row: u32, column: u32, value: u32) -> Self {
        Self {
            row,
            column,
            value,
            selected: false,
            locked: false,
        }
    }

    pub fn pos(&self) -> TilePos {
        TilePos::new(self.row, self.column)
    }

    /// Whether the tile face is shown.
    pub fn is_face_up(&self) -> bool {
        self.selected || self.locked
    }
}

/// Check that a configuration deals a complete board.
pub fn validate_config(config: &GameConfig) -> Result<()> {
    let reject = |reason| {
        Err(EngineError::InvalidConfiguration {
            rows: config.rows,
            columns: config.columns,
            match_size: config.match_size,
            reason,
        })
    };

    if config.rows == 0 || config.columns == 0 {
        return reject("board dimensions must be positive");
    }
    if config.match_size == 0 {
        return reject("match size must be positive");
    }
    let tiles = config.rows as u64 * config.columns as u64;
    if tiles > MAX_TILES as u64 {
        return reject("board has too many tiles");
    }
    if tiles % config.match_size as u64 != 0 {
        return reject("match size must divide the tile count");
    }
    Ok(())
}

/// The game board with copy-on-write tile storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u32,
    columns: u32,
    /// Flat array of tiles, row-major order (row * columns + column)
    tiles: Arc<Vec<Tile>>,
}

impl Board {
    /// Deal a new shuffled board.
    pub fn generate(config: &GameConfig, rng: &mut SimpleRng) -> Result<Self> {
        validate_config(config)?;
        Ok(Self::deal(config, rng))
    }

    /// Deal from a configuration that already passed [`validate_config`].
    pub(crate) fn deal(config: &GameConfig, rng: &mut SimpleRng) -> Self {
        let deck = shuffled_deck(config, rng);
        Self::from_values(config.rows, config.columns, &deck)
    }

    /// Lay out `values` row-major. Missing values become group 0; callers
    /// are expected to pass exactly `rows * columns` entries.
    pub fn from_values(rows: u32, columns: u32, values: &[u32]) -> Self {
        let len = (rows as usize) * (columns as usize);
        let tiles = (0..len)
            .map(|i| {
                let pos = TilePos::from_index(i, columns);
                Tile::new(pos.row, pos.column, values.get(i).copied().unwrap_or(0))
            })
            .collect();
        Self {
            rows,
            columns,
            tiles: Arc::new(tiles),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline(always)]
    fn index(&self, pos: TilePos) -> Option<usize> {
        if pos.row >= self.rows || pos.column >= self.columns {
            return None;
        }
        Some(pos.index(self.columns))
    }

    /// Tile at `pos`, `None` if out of bounds
    pub fn get(&self, pos: TilePos) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// Mutable access; clones the storage if a snapshot still shares it.
    pub fn get_mut(&mut self, pos: TilePos) -> Option<&mut Tile> {
        let i = self.index(pos)?;
        Some(&mut Arc::make_mut(&mut self.tiles)[i])
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn locked_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.locked).count()
    }

    pub fn selected_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.selected).count()
    }

    /// Whether two boards share the same tile storage (no copy happened yet).
    pub fn shares_storage(&self, other: &Board) -> bool {
        Arc::ptr_eq(&self.tiles, &other.tiles)
    }

    /// Values in row-major order.
    pub fn values(&self) -> Vec<u32> {
        self.tiles.iter().map(|t| t.value).collect()
    }
}
