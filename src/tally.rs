//! Derives file extensions and counts files per extension.
//!
//! An extension is the tail of a base name starting at its last `.`, so
//! `archive.tar.gz` is counted under `.gz` and `.bashrc` under `.bashrc`.
//! Names without any `.` carry no extension and are left out of the tally.

use log::debug;
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from extension (with its leading dot) to the number of files carrying it.
///
/// Keys are kept in lexical order; the reporter decides the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionTally {
    counts: BTreeMap<String, usize>,
}

impl ExtensionTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one file to the count for `extension`.
    pub fn increment(&mut self, extension: &str) {
        *self.counts.entry(extension.to_string()).or_insert(0) += 1;
    }

    /// Returns the count recorded for `extension`, if any.
    pub fn get(&self, extension: &str) -> Option<usize> {
        self.counts.get(extension).copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` when no file was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(extension, count)` pairs in lexical order of the extension.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(ext, count)| (ext.as_str(), *count))
    }
}

/// Returns the base name of `name`, the final path segment.
fn base_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|os| os.to_str())
        .unwrap_or(name)
}

/// Returns the extension of a file name: the substring from the last `.` of
/// its base name to the end, or `None` when the base name has no `.`.
///
/// # Examples
///
/// ```
/// use dirsum::tally::file_extension;
///
/// assert_eq!(file_extension("main.rs"), Some(".rs"));
/// assert_eq!(file_extension("archive.tar.gz"), Some(".gz"));
/// assert_eq!(file_extension(".gitignore"), Some(".gitignore"));
/// assert_eq!(file_extension("Makefile"), None);
/// ```
pub fn file_extension(name: &str) -> Option<&str> {
    let base = base_name(name);
    base.rfind('.').map(|idx| &base[idx..])
}

/// Lists the distinct extensions among `files`, in first-seen order.
pub fn list_distinct_extensions<S: AsRef<str>>(files: &[S]) -> Vec<String> {
    let mut extensions: Vec<String> = Vec::new();
    for file in files {
        let Some(ext) = file_extension(file.as_ref()) else {
            continue;
        };
        if extensions.iter().any(|known| known == ext) {
            continue;
        }
        extensions.push(ext.to_string());
    }
    extensions
}

/// Counts files per extension.
///
/// A file takes part only if its full name contains any of `extensions` as a
/// substring, at any position. The key it is counted under is always its own
/// trailing extension, never the substring that let it in.
pub fn build_extension_counts<S: AsRef<str>>(
    files: &[S],
    extensions: &[String],
) -> ExtensionTally {
    let mut tally = ExtensionTally::new();
    for file in files {
        let file = file.as_ref();
        if !contains_any(file, extensions) {
            continue;
        }
        if let Some(ext) = file_extension(file) {
            tally.increment(ext);
        }
    }
    debug!(
        "Tallied {} files across {} extensions",
        tally.total(),
        tally.len()
    );
    tally
}

fn contains_any(file: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| file.contains(ext.as_str()))
}

/// Builds the full tally for a list of file names.
pub fn tally_extensions<S: AsRef<str>>(files: &[S]) -> ExtensionTally {
    let extensions = list_distinct_extensions(files);
    build_extension_counts(files, &extensions)
}
