//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates the settings derived from the raw CLI tokens,
//! making them available to the rest of the application in a structured and
//! type-safe manner.

pub use builder::ConfigBuilder;
pub use flags::FlagSet;
pub use parsing::{extract_flag_tokens, is_help_requested, resolve_target_path};

use std::path::PathBuf;

mod builder;
mod flags;
mod parsing;

/// Order in which extension lines are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Lexical order of the extension strings.
    #[default]
    ByName,
    /// Order by file count.
    ByCount,
}

/// Configuration options related to formatting the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportConfig {
    /// Which key the extension lines are sorted on.
    pub sort: SortMode,
    /// Inverts the natural direction of `sort`. In `ByName` mode this lists
    /// descending; in `ByCount` mode (descending by default) it lists ascending.
    pub reverse: bool,
    /// Whether to print the `Total files:` line after the listing.
    pub show_total: bool,
}

impl ReportConfig {
    /// Derives the report settings from the active flag letters.
    ///
    /// `v` selects count sorting and the total, exactly like `n` plus `t`.
    pub fn from_flags(flags: FlagSet) -> Self {
        Self {
            sort: if flags.numeric || flags.verbose {
                SortMode::ByCount
            } else {
                SortMode::ByName
            },
            reverse: flags.reverse,
            show_total: flags.total || flags.verbose,
        }
    }
}

/// Settings for one run, built from the CLI tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The directory (or file) to walk. Not checked for existence.
    pub input_path: PathBuf,
    /// When `true`, only the help text is printed and no walk happens.
    pub help_requested: bool,
    /// Configuration for the report stage.
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            help_requested: false,
            report: ReportConfig::default(),
        }
    }
}
