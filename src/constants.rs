// src/constants.rs

/// Prefix of the line printed after the listing when a total is requested.
pub const TOTAL_PREFIX: &str = "Total files";

/// Static help text printed for `-h`, `--help`, or when no arguments are given.
pub const HELP_TEXT: &str = "Welcome to the dirsum help menu!
Usage: dirsum <path> <opt args>
Valid arguments include:
-h or --help (see this menu)
-n (sort by number)
-r (reverse the sort order)
-t (print the total number of files)
-v (verbose: equal to -nt)
All flags may be chained together (e.g. -nrtv) except for -h and --help.
";
