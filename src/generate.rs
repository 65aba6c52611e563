//! Table generation with reporting
//!
//! Glue between the pure mapping code, the exporters and a reporter. The
//! binary drives everything through these functions.

use crate::config::GenerationConfig;
use crate::domain::GridSpec;
use crate::export;
use crate::layout::ClockLayout;
use crate::reporters::TableReporter;
use crate::tiling::{self, TileGeometry};
use std::path::Path;

/// Build the grid-to-chain table and verify it visits every LED once
pub fn build_and_check<R: TableReporter + ?Sized>(
    spec: &GridSpec,
    config: &GenerationConfig,
    reporter: &R,
) -> tiling::Result<Vec<usize>> {
    reporter.report_grid(spec, &TileGeometry::new(spec));

    let table = tiling::build_lookup_table_with_config(spec, config)?;
    reporter.report_table_built(table.len(), config.parallel);

    match tiling::verify_bijection(&table) {
        Ok(()) => {
            reporter.report_bijection(table.len(), None);
            Ok(table)
        }
        Err(err) => {
            reporter.report_bijection(table.len(), Some(&err.to_string()));
            Err(err)
        }
    }
}

/// Write the firmware header for `spec` to `path`
pub fn generate_header<R: TableReporter + ?Sized>(
    path: &Path,
    spec: &GridSpec,
    config: &GenerationConfig,
    reporter: &R,
) -> export::Result<()> {
    let layout = ClockLayout::new(*spec)?;
    reporter.report_grid(spec, &TileGeometry::new(spec));
    export::write_led_header_file(path, &layout, config).inspect_err(|err| {
        reporter.report_error(&err.to_string());
    })?;
    reporter.report_file_written(&path.display().to_string());
    Ok(())
}

/// Write the clock index listing for `spec` to `path`
pub fn generate_index<R: TableReporter + ?Sized>(
    path: &Path,
    spec: &GridSpec,
    reporter: &R,
) -> export::Result<()> {
    let layout = ClockLayout::new(*spec)?;
    reporter.report_grid(spec, &TileGeometry::new(spec));
    export::write_index_listing_file(path, &layout).inspect_err(|err| {
        reporter.report_error(&err.to_string());
    })?;
    reporter.report_file_written(&path.display().to_string());
    Ok(())
}
