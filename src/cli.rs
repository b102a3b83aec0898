// src/cli.rs

use clap::Parser;
use std::ffi::OsString;

/// Summarize a directory tree by counting files per extension.
///
/// dirsum walks every file under the given path and prints one line per file
/// extension with the number of files carrying it. Flags are read loosely:
/// any token such as `-n`, `-rt` or `-nrtv` switches on the letters it
/// contains, and tokens that are not recognized are ignored.
///
/// The built-in help and version flags are disabled so that `-h` and
/// `--help` reach dirsum's own handling along with every other token.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Target path followed by flag tokens, captured verbatim.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub tokens: Vec<OsString>,
}

impl Cli {
    /// Parses `args` (program name first) keeping every user token verbatim,
    /// including a leading `--` and paths that are not valid UTF-8.
    ///
    /// The program name is dropped here and never takes part in the flag or
    /// help scan.
    pub fn parse_verbatim_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("dirsum"));
        // Our own escape ends option parsing, so clap cannot swallow a user `--`.
        let escaped = [bin, OsString::from("--")].into_iter().chain(args);
        Self::parse_from(escaped)
    }
}
