//! Project root location
//!
//! The project root is the first directory that directly contains one of the
//! conventional frontend folders. This is a best-effort heuristic: the first
//! match wins.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Folder names that mark a project root
pub const ROOT_MARKERS: [&str; 2] = ["@oskit", "src"];

/// Find the directory containing an `@oskit` or `src` folder.
///
/// Checks `start` itself first, then all of its descendants in sorted
/// depth-first order so the result is deterministic for a fixed filesystem
/// state. Returns `None` when the traversal is exhausted without a match.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    if has_marker(start) {
        return Some(start.to_path_buf());
    }

    let walker = WalkDir::new(start).min_depth(1).sort_by_file_name();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_dir() && has_marker(entry.path()) {
            return Some(entry.path().to_path_buf());
        }
    }

    None
}

/// Only existence of the marker entry is checked, not its contents.
fn has_marker(dir: &Path) -> bool {
    ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists())
}
