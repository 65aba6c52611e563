//! Error types for table export

use crate::layout::LayoutError;
use crate::tiling::TilingError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing exported tables
#[derive(Debug, Error)]
pub enum ExportError {
    /// Table entry does not fit the `uint16_t` element type
    #[error("{table}[{index}] = {value} does not fit in uint16_t")]
    ValueTooWide {
        table: &'static str,
        index: usize,
        value: usize,
    },

    /// Failed to create output file
    #[error("Failed to create output file: {file}: {source}")]
    FileCreate {
        file: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Tiling(#[from] TilingError),

    /// I/O error occurred (catch-all for other I/O errors)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with ExportError
pub type Result<T> = std::result::Result<T, ExportError>;
