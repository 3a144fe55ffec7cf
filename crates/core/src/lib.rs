//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board engine of the memory game: dealing boards,
//! resolving taps into selections, matches and mismatches, scoring, and the
//! timed face-down step after a mismatch. It has no dependencies on UI,
//! storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed deals the same board
//! - **Testable**: Every resolution path is unit tested
//! - **Portable**: Any host loop that can call `tap` and `tick` can drive it
//!
//! # Module Structure
//!
//! - [`board`]: `rows x columns` tile grid with copy-on-write storage
//! - [`game_state`]: Session state and the selection/match resolver
//! - [`rng`]: Seeded LCG and the shuffled value deck
//! - [`scoring`]: Tap cost and match refund
//! - [`snapshot`]: Immutable view handed to renderers
//! - [`error`]: Configuration and tap rejections
//!
//! # Game Rules
//!
//! - Every value appears on exactly `match_size` tiles
//! - Each accepted tap costs 1 point; completing a group refunds `match_size - 1`
//! - A mismatch stays face up for 1000ms, or until the next tap on another tile
//! - The board is won when every tile is locked
//!
//! # Example
//!
//! ```
//! use tui_memory_core::GameState;
//! use tui_memory_types::{GameConfig, TapOutcome, TilePos};
//!
//! let mut game = GameState::new(GameConfig::new(2, 2, 2, "demo"), 12345).unwrap();
//!
//! // Find the partner of the top-left tile.
//! let first = TilePos::new(0, 0);
//! let value = game.board().get(first).unwrap().value;
//! let partner = game
//!     .board()
//!     .iter()
//!     .find(|t| t.value == value && t.pos() != first)
//!     .unwrap()
//!     .pos();
//!
//! assert_eq!(game.tap(first).unwrap(), TapOutcome::Selected);
//! assert_eq!(game.tap(partner).unwrap(), TapOutcome::Matched { value });
//! assert_eq!(game.locked_count(), 2);
//! assert_eq!(game.score(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time; it hides a mismatched selection once its delay runs out.

pub mod board;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{validate_config, Board, Tile};
pub use error::EngineError;
pub use game_state::{GameState, PendingClear};
pub use rng::SimpleRng;
pub use scoring::{match_refund, perfect_score};
pub use snapshot::GameSnapshot;
