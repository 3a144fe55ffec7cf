//! Errors raised at the engine boundary.

use thiserror::Error;

/// Rejections of malformed configuration or tap events.
///
/// The engine never mutates state before returning one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid configuration {rows}x{columns} with match size {match_size}: {reason}")]
    InvalidConfiguration {
        rows: u32,
        columns: u32,
        match_size: u32,
        reason: &'static str,
    },

    #[error("no tile at row {row}, column {column}")]
    InvalidTileReference { row: u32, column: u32 },

    #[error("tile at row {row}, column {column} has value {actual}, tap named {expected}")]
    TileValueMismatch {
        row: u32,
        column: u32,
        expected: u32,
        actual: u32,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
