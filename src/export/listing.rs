//! Human-readable clock index

use super::error::Result;
use crate::layout::ClockLayout;
use std::io::Write;

/// Write one `"h:mm": {"col": c, "row": r},` line per clock, in grid order
pub fn write_index_listing<W: Write>(writer: &mut W, layout: &ClockLayout) -> Result<()> {
    for (time, position) in layout.placements() {
        writeln!(
            writer,
            "\"{}\": {{\"col\": {}, \"row\": {}}},",
            time, position.col, position.row
        )?;
    }
    Ok(())
}
