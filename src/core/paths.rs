//! Path normalization utilities
//!
//! Ensures all paths are normalized to use '/' as separator and are relative to
//! the project root.

use std::path::Path;

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Relative display form of `path` under `root`.
///
/// Falls back to a textual prefix strip when the path is not actually under
/// the root (symlinked folders, mixed absolute/relative inputs), so callers
/// always get something printable.
pub fn relative_display(path: &Path, root: &Path) -> String {
    if let Some(rel) = make_relative(path, root) {
        return rel;
    }

    let full = normalize_path(path);
    let root_str = normalize_path(root);
    match full.strip_prefix(&root_str) {
        Some(stripped) => stripped.trim_start_matches('/').to_string(),
        None => full,
    }
}

/// Full suffix chain of a file name, e.g. `.module.css` for `styles.module.css`.
///
/// The chain is every dot-separated suffix concatenated in order, so a file
/// ending in two suffixes is keyed more specifically than one ending in a
/// single suffix. Dotfiles like `.env` have no suffix chain.
pub fn suffix_chain(path: &Path) -> String {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return String::new(),
    };

    let trimmed = name.trim_start_matches('.');
    match trimmed.find('.') {
        Some(idx) => trimmed[idx..].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.ts");
        assert_eq!(normalize_path(path), "src/main.ts");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/App.tsx");
        assert_eq!(make_relative(path, root), Some("src/App.tsx".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.ts");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_relative_display_unrelated_path() {
        let root = Path::new("/project");
        let path = Path::new("/elsewhere/x.css");
        assert_eq!(relative_display(path, root), "/elsewhere/x.css");
    }

    #[test]
    fn test_relative_display_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/project/@oskit/button.vue");
        assert_eq!(relative_display(path, root), "@oskit/button.vue");
    }

    #[test]
    fn test_suffix_chain_single() {
        assert_eq!(suffix_chain(Path::new("App.tsx")), ".tsx");
        assert_eq!(suffix_chain(Path::new("a/b/main.ts")), ".ts");
    }

    #[test]
    fn test_suffix_chain_compound() {
        assert_eq!(suffix_chain(Path::new("styles.module.css")), ".module.css");
        assert_eq!(suffix_chain(Path::new("grid.module.scss")), ".module.scss");
    }

    #[test]
    fn test_suffix_chain_dotfile() {
        assert_eq!(suffix_chain(Path::new(".env")), "");
        assert_eq!(suffix_chain(Path::new(".eslintrc.js")), ".js");
    }

    #[test]
    fn test_suffix_chain_no_extension() {
        assert_eq!(suffix_chain(Path::new("Makefile")), "");
        assert_eq!(suffix_chain(Path::new("dir/README")), "");
    }
}
