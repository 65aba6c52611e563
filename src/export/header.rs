//! C header with the firmware lookup tables
//!
//! The header holds two `PROGMEM` arrays:
//! - `ledMap`: minute of the half day -> grid index of its clock
//! - `matrixMap`: grid index -> position in the LED chain

use super::error::{ExportError, Result};
use std::io::Write;

const INCLUDE_GUARD: &str = "LED_ARRAYS";
const VALUES_PER_LINE: usize = 16;

/// Write the `ledMap`/`matrixMap` header to `writer`
///
/// Both tables are checked against `u16::MAX` before anything is written, so a
/// failed call leaves `writer` untouched.
pub fn write_led_header<W: Write>(
    writer: &mut W,
    led_map: &[usize],
    matrix_map: &[usize],
) -> Result<()> {
    check_u16("ledMap", led_map)?;
    check_u16("matrixMap", matrix_map)?;

    writeln!(writer, "#ifndef {}", INCLUDE_GUARD)?;
    writeln!(writer, "#define {}", INCLUDE_GUARD)?;
    writeln!(writer)?;
    write_array(writer, "ledMap", led_map)?;
    write_array(writer, "matrixMap", matrix_map)?;
    writeln!(writer)?;
    writeln!(writer, "#endif")?;
    Ok(())
}

fn check_u16(table: &'static str, values: &[usize]) -> Result<()> {
    match values
        .iter()
        .enumerate()
        .find(|&(_, &v)| v > u16::MAX as usize)
    {
        Some((index, &value)) => Err(ExportError::ValueTooWide {
            table,
            index,
            value,
        }),
        None => Ok(()),
    }
}

fn write_array<W: Write>(writer: &mut W, name: &str, values: &[usize]) -> Result<()> {
    writeln!(
        writer,
        "const uint16_t {}[{}] PROGMEM = {{",
        name,
        values.len()
    )?;
    for chunk in values.chunks(VALUES_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "  {},", line.join(", "))?;
    }
    writeln!(writer, "}};")?;
    Ok(())
}
