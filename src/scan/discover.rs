//! Frontend file discovery
//!
//! Recursively enumerates candidate files under a target folder and groups
//! them by their actual full suffix chain. A file matching both a generic
//! pattern (`*.css`) and a more specific one (`*.module.css`) is grouped
//! once, under its true compound extension.

use colored::Colorize;
use globset::{Glob, GlobSet, GlobSetBuilder};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::paths::suffix_chain;

/// Glob patterns for every frontend file kind we collect
pub const EXTENSION_PATTERNS: [&str; 13] = [
    // TypeScript
    "*.ts",
    "*.tsx",
    // JavaScript/React
    "*.js",
    "*.jsx",
    // Stylesheets
    "*.css",
    "*.scss",
    "*.sass",
    "*.less",
    // Style modules
    "*.module.css",
    "*.module.scss",
    "*.module.sass",
    // Component formats
    "*.vue",
    "*.svelte",
];

static EXTENSION_GLOBS: Lazy<GlobSet> = Lazy::new(|| {
    let mut builder = GlobSetBuilder::new();
    for pattern in EXTENSION_PATTERNS {
        // Patterns are fixed literals, so building cannot fail at runtime
        builder.add(Glob::new(pattern).expect("valid extension pattern"));
    }
    builder.build().expect("valid extension glob set")
});

/// Discovered files keyed by exact suffix chain, each group sorted by path
pub type FileGroups = BTreeMap<String, Vec<PathBuf>>;

/// Recursively find all frontend files under `folder`.
///
/// Missing folders are skipped with a warning and yield an empty result;
/// this is non-fatal so a run can continue with the folders that do exist.
/// Traversal is sorted depth-first for deterministic output, and each group
/// is sorted lexicographically by full path.
pub fn discover_files(folder: &Path) -> FileGroups {
    let mut groups = FileGroups::new();

    if !folder.exists() {
        eprintln!(
            "{}",
            format!(
                "Warning: Folder '{}' does not exist, skipping...",
                folder.display()
            )
            .yellow()
        );
        return groups;
    }

    let walker = WalkDir::new(folder).sort_by_file_name();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = Path::new(entry.file_name());
        if !EXTENSION_GLOBS.is_match(name) {
            continue;
        }

        let key = suffix_chain(entry.path());
        groups.entry(key).or_default().push(entry.into_path());
    }

    for files in groups.values_mut() {
        files.sort();
    }

    groups
}

/// Merge one discovery result into an accumulated set.
///
/// Groups concatenate by key; callers re-sort merged groups afterwards to
/// restore global per-group order across folders.
pub fn merge_groups(into: &mut FileGroups, from: FileGroups) {
    for (key, files) in from {
        into.entry(key).or_default().extend(files);
    }
}

/// Re-sort every group after a merge
pub fn sort_groups(groups: &mut FileGroups) {
    for files in groups.values_mut() {
        files.sort();
    }
}

/// Total number of files across all groups
pub fn total_files(groups: &FileGroups) -> usize {
    groups.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn test_missing_folder_yields_empty() {
        let temp = tempdir().unwrap();
        let groups = discover_files(&temp.path().join("nope"));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_groups_by_actual_suffix_chain() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("plain.css"));
        touch(&temp.path().join("styles.module.css"));
        touch(&temp.path().join("App.tsx"));

        let groups = discover_files(temp.path());

        // .module.css matches both *.css and *.module.css but is grouped once
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[".css"].len(), 1);
        assert_eq!(groups[".module.css"].len(), 1);
        assert_eq!(groups[".tsx"].len(), 1);
    }

    #[test]
    fn test_ignores_non_frontend_files() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("main.rs"));
        touch(&temp.path().join("notes.txt"));
        touch(&temp.path().join("index.js"));

        let groups = discover_files(temp.path());
        assert_eq!(groups.len(), 1);
        assert!(groups.contains_key(".js"));
    }

    #[test]
    fn test_recurses_into_subdirectories() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("components/deep/nested/Button.vue"));
        touch(&temp.path().join("top.svelte"));

        let groups = discover_files(temp.path());
        assert_eq!(groups[".vue"].len(), 1);
        assert_eq!(groups[".svelte"].len(), 1);
    }

    #[test]
    fn test_groups_sorted_by_path() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("z.ts"));
        touch(&temp.path().join("a.ts"));
        touch(&temp.path().join("m/b.ts"));

        let groups = discover_files(temp.path());
        let files = &groups[".ts"];
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, &sorted);
    }

    #[test]
    fn test_merge_then_sort_restores_order() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("one/z.ts"));
        touch(&temp.path().join("two/a.ts"));

        let mut merged = discover_files(&temp.path().join("two"));
        merge_groups(&mut merged, discover_files(&temp.path().join("one")));
        sort_groups(&mut merged);

        let files = &merged[".ts"];
        assert_eq!(files.len(), 2);
        assert!(files[0] < files[1]);
        assert_eq!(total_files(&merged), 2);
    }
}
