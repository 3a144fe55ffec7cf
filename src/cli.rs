//! Command-line options for the terminal runner.

use anyhow::{bail, Result};
use clap::Parser;

use crate::core::validate_config;
use crate::types::GameConfig;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "Tile-matching memory game in the terminal", long_about = None)]
pub struct Args {
    /// Preset: easy (3x4 pairs), medium (4x4 pairs) or hard (4x6 triples)
    #[arg(long, default_value = "medium")]
    pub mode: String,

    /// Override the preset's row count
    #[arg(long)]
    pub rows: Option<u32>,

    /// Override the preset's column count
    #[arg(long)]
    pub columns: Option<u32>,

    /// Override tiles per group
    #[arg(long)]
    pub matches: Option<u32>,

    /// Shuffle seed (default: derived from the clock)
    #[arg(long)]
    pub seed: Option<u32>,
}

impl Args {
    /// Preset values with any explicit overrides applied, validated.
    ///
    /// An unknown mode name is accepted as a label when all three
    /// dimensions are given explicitly.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match GameConfig::preset(&self.mode) {
            Some(config) => config,
            None if self.rows.is_some() && self.columns.is_some() && self.matches.is_some() => {
                GameConfig::new(0, 0, 0, self.mode.clone())
            }
            None => bail!(
                "unknown mode {:?} (expected one of {})",
                self.mode,
                GameConfig::PRESETS.join(", ")
            ),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(matches) = self.matches {
            config.match_size = matches;
        }

        validate_config(&config)?;
        Ok(config)
    }
}
