//! Score persistence for finished games.
//!
//! A finished game is turned into a [`ScoreRecord`] and appended to a
//! collection in a [`ScoreStore`]. Collections are plain arrays keyed by name
//! (the game uses [`SCORES_COLLECTION_KEY`](crate::types::SCORES_COLLECTION_KEY)),
//! which keeps the file readable by any score-listing tool.
//!
//! # Stores
//!
//! - [`JsonFileStore`]: one JSON object on disk, rewritten atomically on append
//! - [`MemoryStore`]: process-local, for tests and headless runs
//!
//! # Example
//!
//! ```
//! use tui_memory_store::{MemoryStore, ScoreRecord, ScoreStore};
//! use tui_memory_types::{GameConfig, SCORES_COLLECTION_KEY};
//!
//! let store = MemoryStore::new();
//! let config = GameConfig::new(4, 4, 2, "medium");
//! let record = ScoreRecord::new("ada", &config, 12, "Sat, 17 Oct 2026 12:00:00 GMT");
//!
//! store.append(SCORES_COLLECTION_KEY, &record).unwrap();
//! let all = store.load(SCORES_COLLECTION_KEY).unwrap();
//! assert_eq!(all, vec![record]);
//! assert_eq!(all[0].matrix, "4x4");
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod store;

pub use tui_memory_types as types;

pub use config::StoreConfig;
pub use error::StoreError;
pub use record::{format_utc_date, ScoreRecord};
pub use store::{JsonFileStore, MemoryStore, ScoreStore};
