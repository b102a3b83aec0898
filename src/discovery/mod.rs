//! Walks the target directory tree and collects file base names.
use crate::errors::{traversal_error, Result};
use log::debug;
use std::path::Path;

mod walker;

use walker::build_walker;

/// Collects the base name of every non-directory entry under `root`.
///
/// The traversal is fully recursive and visits the root itself, so passing a
/// file path yields that single file. Directories never appear in the result,
/// but their contents are always visited. Names are returned in visitation
/// order: depth-first, lexical within each directory.
///
/// # Errors
/// Returns `Error::Traversal` as soon as any entry cannot be read (missing
/// root, permission denied, I/O failure). No partial result is returned.
///
/// # Examples
///
/// ```
/// use dirsum::discovery::collect_files;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// fs::create_dir(temp.path().join("sub")).unwrap();
/// fs::write(temp.path().join("b.rs"), "").unwrap();
/// fs::write(temp.path().join("sub").join("a.md"), "").unwrap();
///
/// let files = collect_files(temp.path()).unwrap();
/// assert_eq!(files, vec!["b.rs", "a.md"]);
/// ```
pub fn collect_files<P: AsRef<Path>>(root: P) -> Result<Vec<String>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for entry_result in build_walker(root) {
        let entry = entry_result.map_err(|e| traversal_error(e, root))?;
        if entry.file_type().is_dir() {
            continue;
        }
        files.push(entry.file_name().to_string_lossy().into_owned());
    }

    debug!(
        "Discovery complete. {} files found under {:?}",
        files.len(),
        root
    );
    Ok(files)
}
