// src/config/parsing.rs

use crate::errors::{Error, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ffi::OsStr;
use std::path::PathBuf;

/// A hyphen followed by at least one flag letter, searched anywhere in a token.
const FLAG_PATTERN: &str = r"\-[nrtv]*[nrtv]";

static FLAG_REGEX: Lazy<std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(FLAG_PATTERN));

/// Returns the target path: the first user token, or `"."` when there is none.
///
/// The token is taken whatever it looks like, and its existence is not checked
/// here; a bad path surfaces later as a traversal error.
pub fn resolve_target_path<S: AsRef<OsStr>>(tokens: &[S]) -> PathBuf {
    tokens
        .first()
        .map(|t| PathBuf::from(t.as_ref()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns `true` if any token is exactly `-h` or `--help`.
pub fn is_help_requested<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens
        .iter()
        .any(|t| matches!(t.as_ref(), "-h" | "--help"))
}

/// Collects every token that contains a hyphen and matches the flag pattern.
///
/// The match is a search, not an anchored parse, so a token such as `-nx`
/// or `a-t` qualifies while `-x` and `--help` do not.
///
/// # Errors
/// Returns `Error::PatternCompilation` if the flag pattern cannot be compiled.
pub fn extract_flag_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>> {
    let pattern = (*FLAG_REGEX)
        .as_ref()
        .map_err(|e| Error::PatternCompilation(e.clone()))?;

    let flags: Vec<String> = tokens
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| t.contains('-') && pattern.is_match(t))
        .map(str::to_string)
        .collect();

    debug!("Matched flag tokens: {:?}", flags);
    Ok(flags)
}
