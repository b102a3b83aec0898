// src/discovery/walker.rs

use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Configures the `walkdir::WalkDir` used for discovery.
///
/// Entries are yielded depth-first with each directory's children sorted by
/// file name, so the visitation order is stable for a given tree. Symbolic
/// links are not followed.
pub(super) fn build_walker(root: &Path) -> WalkDir {
    debug!(
        "Configuring WalkDir for {:?}: sorted by file name, links not followed.",
        root
    );
    WalkDir::new(root).follow_links(false).sort_by_file_name()
}
