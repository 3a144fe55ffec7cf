use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or writing a score store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("score file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("collection {key} is not a list of scores")]
    Corrupt { key: String },

    #[error("collection {key} holds a malformed score record: {source}")]
    Record {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("score store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
