//! File categorization
//!
//! Maps a file's full suffix chain to a human-readable language label.

use std::fmt;

/// Language/category label for a discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    TypeScript,
    JavaScriptReact,
    Css,
    ScssSass,
    Less,
    Vue,
    Svelte,
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::TypeScript => "TypeScript",
            Category::JavaScriptReact => "JavaScript/React",
            Category::Css => "CSS",
            Category::ScssSass => "SCSS/Sass",
            Category::Less => "LESS",
            Category::Vue => "Vue",
            Category::Svelte => "Svelte",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorize a file by its full suffix chain (case-insensitive).
///
/// Compound chains are matched exactly, so `.module.css` is CSS while
/// `.min.js` (not in the known set) falls through to Other.
pub fn categorize(suffix_chain: &str) -> Category {
    match suffix_chain.to_lowercase().as_str() {
        ".ts" | ".tsx" => Category::TypeScript,
        ".js" | ".jsx" => Category::JavaScriptReact,
        ".css" | ".module.css" => Category::Css,
        ".scss" | ".sass" | ".module.scss" | ".module.sass" => Category::ScssSass,
        ".less" => Category::Less,
        ".vue" => Category::Vue,
        ".svelte" => Category::Svelte,
        _ => Category::Other,
    }
}
