// src/config/builder.rs

use super::{
    parsing::{extract_flag_tokens, is_help_requested, resolve_target_path},
    Config, FlagSet, ReportConfig, SortMode,
};
use crate::cli::Cli;
use crate::errors::Result;
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically or from CLI tokens.
///
/// Values set through the setter methods take precedence over whatever the
/// CLI tokens imply.
///
/// # Examples
///
/// ```
/// use dirsum::config::{ConfigBuilder, SortMode};
///
/// let config = ConfigBuilder::new()
///     .input_path("src")
///     .sort(SortMode::ByCount)
///     .show_total(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.input_path, std::path::PathBuf::from("src"));
/// assert_eq!(config.report.sort, SortMode::ByCount);
/// assert!(config.report.show_total);
/// assert!(!config.help_requested);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    tokens: Option<Vec<OsString>>,
    input_path: Option<PathBuf>,
    help_requested: Option<bool>,
    sort: Option<SortMode>,
    reverse: Option<bool>,
    show_total: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `ConfigBuilder` from the raw tokens captured by `Cli`.
    ///
    /// An empty token list requests help, the same as `-h`.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            tokens: Some(cli.tokens),
            ..Self::default()
        }
    }

    /// Sets the directory to walk.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Forces help mode on or off.
    pub fn help_requested(mut self, requested: bool) -> Self {
        self.help_requested = Some(requested);
        self
    }

    /// Sets the sort key for the report.
    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets whether the active sort order is reversed.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = Some(reverse);
        self
    }

    /// Sets whether the total line is printed.
    pub fn show_total(mut self, show_total: bool) -> Self {
        self.show_total = Some(show_total);
        self
    }

    /// Builds the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::PatternCompilation` if the flag pattern cannot be compiled.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        // `tokens` holds user arguments only; the program name was dropped by
        // `Cli::parse_verbatim_from` and is never scanned for flags or help.
        if let Some(tokens) = self.tokens.as_deref() {
            config.input_path = resolve_target_path(tokens);
            let text: Vec<String> = tokens
                .iter()
                .map(|t| t.to_string_lossy().into_owned())
                .collect();
            config.help_requested = text.is_empty() || is_help_requested(&text);
            let flag_tokens = extract_flag_tokens(&text)?;
            config.report = ReportConfig::from_flags(FlagSet::from_tokens(&flag_tokens));
        }

        if let Some(path) = self.input_path {
            config.input_path = path;
        }
        if let Some(help) = self.help_requested {
            config.help_requested = help;
        }
        if let Some(sort) = self.sort {
            config.report.sort = sort;
        }
        if let Some(reverse) = self.reverse {
            config.report.reverse = reverse;
        }
        if let Some(show_total) = self.show_total {
            config.report.show_total = show_total;
        }

        debug!("Built config: {:?}", config);
        Ok(config)
    }
}
