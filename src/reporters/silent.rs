//! Silent reporter for table generation
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::{Reporter, TableReporter};
use crate::domain::GridSpec;
use crate::tiling::TileGeometry;

/// Silent implementation for table generation
#[derive(Default)]
pub struct SilentTableReporter;

impl SilentTableReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentTableReporter {
    fn report_error(&self, _error: &str) {}
}

impl TableReporter for SilentTableReporter {
    fn report_grid(&self, _spec: &GridSpec, _geometry: &TileGeometry) {}
    fn report_table_built(&self, _entries: usize, _parallel: bool) {}
    fn report_bijection(&self, _entries: usize, _error: Option<&str>) {}
    fn report_file_written(&self, _path: &str) {}
}
