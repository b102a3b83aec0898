// src/output/help.rs

use crate::constants::HELP_TEXT;
use crate::errors::Result;
use std::io::Write;

/// Writes the static help text.
pub fn write_help(writer: &mut dyn Write) -> Result<()> {
    writer.write_all(HELP_TEXT.as_bytes())?;
    writer.flush()?;
    Ok(())
}
