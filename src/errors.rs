//! Defines application-specific error types.
//!
//! Both variants that reach the user are fatal: `main` reports them and exits
//! with status 1.

use thiserror::Error;

/// Errors produced by the `dirsum` pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// The directory walk could not enumerate the target path
    /// (missing path, permission denied, or another I/O failure).
    #[error("{source}")]
    Traversal {
        /// The root path that was being walked.
        path: String,
        /// The underlying `walkdir::Error`.
        #[source]
        source: walkdir::Error,
    },

    /// The internal flag-matching pattern failed to compile.
    #[error("Unable to compile regex")]
    PatternCompilation(#[source] regex::Error),

    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper to create an `Error::Traversal` with the walk root as context.
pub fn traversal_error<P: AsRef<std::path::Path>>(source: walkdir::Error, path: P) -> Error {
    Error::Traversal {
        path: path.as_ref().display().to_string(),
        source,
    }
}
