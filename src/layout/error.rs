//! Error types for clock placement

use crate::tiling::TilingError;
use thiserror::Error;

/// Errors that can occur while placing clocks on the grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Grid cannot hold one clock per minute of a half day
    #[error("Grid of {cells} cells cannot hold {required} clocks")]
    GridTooSmall { cells: usize, required: usize },

    /// Clock time that is not `h:mm` within a half day
    #[error("Invalid clock time {0:?}")]
    InvalidTime(String),

    /// Underlying grid mapping error
    #[error(transparent)]
    Tiling(#[from] TilingError),
}

/// Type alias for Result with LayoutError
pub type Result<T> = std::result::Result<T, LayoutError>;
