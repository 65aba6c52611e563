//! Error types for tile-snake mapping

use thiserror::Error;

/// Errors that can occur while mapping grid cells onto the wiring chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TilingError {
    /// Grid or tile dimensions cannot describe a matrix
    #[error("Invalid grid configuration: {0}")]
    InvalidConfiguration(String),

    /// Linear index outside `[0, len)`
    #[error("Index {index} out of range for grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    /// Row/column pair outside the grid
    #[error("Position (row {row}, col {col}) outside {rows}x{cols} grid")]
    PositionOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A lookup table that does not visit every chain position exactly once
    #[error("Lookup table is not a bijection: {0}")]
    NotABijection(String),
}

/// Type alias for Result with TilingError
pub type Result<T> = std::result::Result<T, TilingError>;
