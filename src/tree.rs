//! Directory tree rendering
//!
//! Turns the discovered file set into an indented box-drawing diagram of the
//! project layout, relative to the project root.
//!
//! Children render in the order they were first inserted, which follows the
//! sorted discovery order per extension group and sorted-key order across
//! groups. This insertion order is an explicit contract, not an accident:
//! re-sorting at render time would change the diagram for the same file set
//! and break diffable, reproducible output.

use indexmap::IndexMap;
use std::path::Path;

use crate::core::paths::relative_display;
use crate::scan::discover::FileGroups;

/// A node in the layout tree: a file, or a directory of named children
#[derive(Debug)]
enum Node {
    Leaf,
    Dir(IndexMap<String, Node>),
}

/// Nested layout of all discovered files, built once and rendered once
#[derive(Debug, Default)]
pub struct FileTree {
    children: IndexMap<String, Node>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from discovery results, with paths made relative to `root`
    pub fn from_groups(groups: &FileGroups, root: &Path) -> Self {
        let mut tree = Self::new();
        for files in groups.values() {
            for file in files {
                tree.insert(&relative_display(file, root));
            }
        }
        tree
    }

    /// Insert one relative path, creating intermediate directories as needed
    pub fn insert(&mut self, relative: &str) {
        let parts: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let Some((file_name, dirs)) = parts.split_last() else {
            return;
        };

        let mut current = &mut self.children;
        for dir in dirs {
            let node = current
                .entry((*dir).to_string())
                .or_insert_with(|| Node::Dir(IndexMap::new()));
            match node {
                Node::Dir(children) => current = children,
                // A file already occupies this name; nothing sane to attach under it
                Node::Leaf => return,
            }
        }

        current.entry((*file_name).to_string()).or_insert(Node::Leaf);
    }

    /// Render the tree with box-drawing connectors.
    ///
    /// Top-level entries carry no connector; below that, the last child of a
    /// level gets `└──` and a blank continuation, every other child gets
    /// `├──` and a `│` continuation.
    pub fn render(&self) -> String {
        if self.children.is_empty() {
            return "No files found.\n".to_string();
        }

        let mut out = String::new();
        render_level(&self.children, "", &mut out);
        out
    }
}

fn render_level(children: &IndexMap<String, Node>, prefix: &str, out: &mut String) {
    let count = children.len();
    for (index, (name, node)) in children.iter().enumerate() {
        let is_last = index + 1 == count;

        if prefix.is_empty() {
            out.push_str(name);
        } else {
            out.push_str(prefix);
            out.push_str(if is_last { "└── " } else { "├── " });
            out.push_str(name);
        }
        out.push('\n');

        if let Node::Dir(sub) = node {
            let mut next_prefix = String::from(prefix);
            next_prefix.push_str(if is_last { "    " } else { "│   " });
            render_level(sub, &next_prefix, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = FileTree::new();
        assert_eq!(tree.render(), "No files found.\n");
    }

    #[test]
    fn test_two_siblings_use_branch_then_corner() {
        let mut tree = FileTree::new();
        tree.insert("x/y.ts");
        tree.insert("x/z.ts");

        let rendered = tree.render();
        assert_eq!(rendered, "x\n    ├── y.ts\n    └── z.ts\n");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut tree = FileTree::new();
        tree.insert("x/z.ts");
        tree.insert("x/a.ts");

        let rendered = tree.render();
        let z_pos = rendered.find("z.ts").unwrap();
        let a_pos = rendered.find("a.ts").unwrap();
        assert!(z_pos < a_pos, "children must not be re-sorted at render time");
    }

    #[test]
    fn test_continuation_bar_for_non_last_toplevel() {
        let mut tree = FileTree::new();
        tree.insert("@oskit/styles.module.css");
        tree.insert("src/App.tsx");

        let rendered = tree.render();
        assert_eq!(
            rendered,
            "@oskit\n│   └── styles.module.css\nsrc\n    └── App.tsx\n"
        );
    }

    #[test]
    fn test_deep_nesting() {
        let mut tree = FileTree::new();
        tree.insert("src/components/forms/Input.tsx");
        tree.insert("src/components/forms/Select.tsx");
        tree.insert("src/index.ts");

        let rendered = tree.render();
        assert!(rendered.contains("src\n"));
        assert!(rendered.contains("├── components\n"));
        assert!(rendered.contains("│   └── forms\n"));
        assert!(rendered.contains("├── Input.tsx"));
        assert!(rendered.contains("└── Select.tsx"));
        assert!(rendered.contains("└── index.ts"));
    }

    #[test]
    fn test_duplicate_insert_is_idempotent() {
        let mut tree = FileTree::new();
        tree.insert("src/App.tsx");
        tree.insert("src/App.tsx");

        let rendered = tree.render();
        assert_eq!(rendered.matches("App.tsx").count(), 1);
    }
}
