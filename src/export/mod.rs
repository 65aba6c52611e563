//! Export of lookup tables for the firmware and for humans
//!
//! Writers take any `io::Write`; the `*_file` helpers create the file and
//! buffer the output.

pub mod error;
mod header;
mod listing;

pub use error::{ExportError, Result};
pub use header::write_led_header;
pub use listing::write_index_listing;

use crate::config::GenerationConfig;
use crate::layout::ClockLayout;
use crate::tiling::build_lookup_table_with_config;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default name of the firmware header
pub const DEFAULT_HEADER_FILE: &str = "led_arrays.h";
/// Default name of the clock index listing
pub const DEFAULT_INDEX_FILE: &str = "720_clocks_index.txt";

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| ExportError::FileCreate {
        file: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Build both tables for `layout` and write the header to `path`
pub fn write_led_header_file(
    path: &Path,
    layout: &ClockLayout,
    config: &GenerationConfig,
) -> Result<()> {
    let led_map = layout.led_map();
    let matrix_map = build_lookup_table_with_config(layout.spec(), config)?;

    // Render first so a table that does not fit leaves no file behind
    let mut contents = Vec::new();
    write_led_header(&mut contents, &led_map, &matrix_map)?;

    let mut writer = create_file(path)?;
    writer.write_all(&contents)?;
    writer.flush()?;
    debug!(
        "Wrote {} ({} + {} entries)",
        path.display(),
        led_map.len(),
        matrix_map.len()
    );
    Ok(())
}

/// Write the clock index listing for `layout` to `path`
pub fn write_index_listing_file(path: &Path, layout: &ClockLayout) -> Result<()> {
    let mut writer = create_file(path)?;
    write_index_listing(&mut writer, layout)?;
    writer.flush()?;
    debug!("Wrote {}", path.display());
    Ok(())
}
