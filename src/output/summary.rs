// src/output/summary.rs

use crate::constants;
use crate::errors::Result;
use std::io::Write;

/// Writes the total line, preceded by a blank line.
pub fn write_total(writer: &mut dyn Write, total: usize) -> Result<()> {
    write!(writer, "\n{}: {}\n", constants::TOTAL_PREFIX, total)?;
    Ok(())
}
