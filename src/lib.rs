//! `dirsum` is a library and command-line tool that summarizes a directory
//! tree by counting its files per extension.
//!
//! As a library, it provides a small, three-stage pipeline:
//! 1.  **Discover**: Walk the tree and collect every file's base name.
//! 2.  **Tally**: Derive each name's extension and count files per extension.
//! 3.  **Report**: Sort the tally by name or count and write it out.
//!
//! # Example: Library Usage
//!
//! ```
//! use dirsum::{discover, tally, report, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a temporary directory with some files.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("a.go"), "").unwrap();
//! fs::write(temp_dir.path().join("b.py"), "").unwrap();
//! fs::write(temp_dir.path().join("c.go"), "").unwrap();
//!
//! // 2. Create a Config object programmatically using the builder.
//! let config = ConfigBuilder::new()
//!     .input_path(temp_dir.path().to_str().unwrap())
//!     .show_total(true)
//!     .build()
//!     .unwrap();
//!
//! // 3. Run the stages.
//! let files = discover(&config).unwrap();
//! let counts = tally(&files);
//! let mut output_buffer = Vec::new();
//! report(&counts, &config, &mut output_buffer).unwrap();
//!
//! let output = String::from_utf8(output_buffer).unwrap();
//! assert_eq!(output, ".go: 2\n.py: 1\n\nTotal files: 3\n");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod output;
pub mod tally;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, ReportConfig, SortMode};
pub use errors::{Error, Result};
pub use tally::ExtensionTally;

use std::io::Write;

/// Collects the base names of all files under `config.input_path`.
///
/// # Errors
/// Returns `Error::Traversal` if the walk cannot enumerate the path.
pub fn discover(config: &Config) -> Result<Vec<String>> {
    discovery::collect_files(&config.input_path)
}

/// Counts the discovered file names per extension.
pub fn tally<S: AsRef<str>>(files: &[S]) -> ExtensionTally {
    tally::tally_extensions(files)
}

/// Writes the sorted listing (and the total, if configured) to `writer`.
pub fn report(counts: &ExtensionTally, config: &Config, writer: &mut dyn Write) -> Result<()> {
    output::write_report(writer, counts, &config.report)
}

/// Executes the complete dirsum pipeline: help, or discover, tally, and report.
///
/// In help mode only the help text is written and the file system is not
/// touched. Otherwise the walk runs to completion before anything is written,
/// so a traversal error leaves `writer` untouched.
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<()> {
    if config.help_requested {
        log::debug!("Help requested; skipping the walk.");
        return output::help::write_help(writer);
    }

    let files = discover(config)?;
    let counts = tally(&files);
    report(&counts, config, writer)
}
