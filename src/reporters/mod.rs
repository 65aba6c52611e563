//! Progress and output reporting for table generation
//!
//! This module provides traits and implementations for reporting what the
//! generator is doing. It allows the core logic to be decoupled from output
//! formatting.

mod console;
mod silent;

pub use console::ConsoleTableReporter;
pub use silent::SilentTableReporter;

use crate::domain::GridSpec;
use crate::tiling::TileGeometry;

/// Base trait for all reporters
pub trait Reporter: Send + Sync {
    /// Report an error that occurred during operation
    fn report_error(&self, error: &str);
}

/// Trait for reporting lookup table generation
pub trait TableReporter: Reporter {
    /// Report the grid and its derived tile geometry
    fn report_grid(&self, spec: &GridSpec, geometry: &TileGeometry);

    /// Report that a table of `entries` values was built
    fn report_table_built(&self, entries: usize, parallel: bool);

    /// Report the outcome of the bijection check
    fn report_bijection(&self, entries: usize, error: Option<&str>);

    /// Report that an output file was written
    fn report_file_written(&self, path: &str);
}
