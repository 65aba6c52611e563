//! Console reporter for table generation

use super::{Reporter, TableReporter};
use crate::domain::GridSpec;
use crate::tiling::TileGeometry;

/// Console implementation for table generation
#[derive(Default)]
pub struct ConsoleTableReporter;

impl ConsoleTableReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleTableReporter {
    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }
}

impl TableReporter for ConsoleTableReporter {
    fn report_grid(&self, spec: &GridSpec, geometry: &TileGeometry) {
        println!("Grid: {} ({} LEDs)", spec, spec.cell_count());
        println!(
            "  Tiles per row: {} ({} full{})",
            geometry.tiles_per_row,
            geometry.full_tile_cols,
            if geometry.has_partial_col() {
                format!(", 1 partial of width {}", geometry.extra_cols)
            } else {
                String::new()
            }
        );
        println!(
            "  Tile rows: {} ({} full{})",
            geometry.tiles_per_col,
            geometry.full_tile_rows,
            if geometry.has_partial_row() {
                format!(", 1 partial of height {}", geometry.extra_rows)
            } else {
                String::new()
            }
        );
    }

    fn report_table_built(&self, entries: usize, parallel: bool) {
        println!(
            "Built lookup table with {} entries ({})",
            entries,
            if parallel { "parallel" } else { "sequential" }
        );
    }

    fn report_bijection(&self, entries: usize, error: Option<&str>) {
        match error {
            None => println!("Chain order covers all {} LEDs exactly once.", entries),
            Some(err) => eprintln!("Chain order is broken: {}", err),
        }
    }

    fn report_file_written(&self, path: &str) {
        println!("Wrote \"{}\"", path);
    }
}
