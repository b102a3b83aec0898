// src/output/mod.rs

use crate::config::{ReportConfig, SortMode};
use crate::errors::{Error, Result};
use crate::tally::ExtensionTally;
use log::debug;
use std::io::Write;

pub mod help;
pub mod summary;

/// Writes the extension listing and, if requested, the total line.
///
/// Each extension is printed as `<ext>: <count>`. The order depends on
/// `report.sort`:
///
/// - `ByName`: extensions ascending; `reverse` lists them descending.
/// - `ByCount`: counts descending; `reverse` lists them ascending.
///
/// # Examples
///
/// ```
/// use dirsum::config::ReportConfig;
/// use dirsum::output::write_report;
/// use dirsum::tally::tally_extensions;
///
/// let tally = tally_extensions(&["a.go", "b.py", "c.go"]);
/// let mut out = Vec::new();
/// write_report(&mut out, &tally, &ReportConfig::default()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), ".go: 2\n.py: 1\n");
/// ```
pub fn write_report(
    writer: &mut dyn Write,
    tally: &ExtensionTally,
    report: &ReportConfig,
) -> Result<()> {
    debug!(
        "Writing report for {} extensions: {:?}",
        tally.len(),
        report
    );

    let entries = match report.sort {
        SortMode::ByName => sorted_by_name(tally, report.reverse),
        SortMode::ByCount => sorted_by_count(tally, report.reverse),
    };

    for (ext, count) in entries {
        writeln!(writer, "{}: {}", ext, count)?;
    }

    if report.show_total {
        summary::write_total(writer, tally.total())?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the user-facing message for a fatal error.
///
/// `PatternCompilation` carries its own message; everything else is prefixed
/// with `Error: `. A failing writer (e.g. a closed pipe) is reported back
/// instead of panicking.
pub fn write_error(writer: &mut dyn Write, err: &Error) -> std::io::Result<()> {
    match err {
        Error::PatternCompilation(_) => writeln!(writer, "{}", err)?,
        _ => writeln!(writer, "Error: {}", err)?,
    }
    writer.flush()
}

fn sorted_by_name(tally: &ExtensionTally, reverse: bool) -> Vec<(&str, usize)> {
    // The tally already iterates in ascending key order.
    let mut entries: Vec<(&str, usize)> = tally.iter().collect();
    if reverse {
        entries.reverse();
    }
    entries
}

fn sorted_by_count(tally: &ExtensionTally, reverse: bool) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = tally.iter().collect();
    // Stable: equal counts keep key order before the reversal below.
    entries.sort_by_key(|&(_, count)| count);
    if !reverse {
        entries.reverse();
    }
    entries
}
