//! Store configuration from the environment.

use std::path::PathBuf;

/// Default score file, relative to the working directory.
pub const DEFAULT_SCORES_PATH: &str = "memory-scores.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub scores_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
        }
    }
}

impl StoreConfig {
    /// Create from environment variables
    ///
    /// - `MEMORY_SCORES_PATH`: score file location (default `memory-scores.json`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let scores_path = lookup("MEMORY_SCORES_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_PATH));

        Self { scores_path }
    }
}
