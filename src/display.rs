//! Diagnostic renderings of the tree structure.
//!
//! Two presentation-only views: a sideways connector-glyph diagram (the
//! `Display` impl, right subtree above the node, left subtree below) and a
//! top-down outline built on `termtree`.

use std::fmt;

use termtree::Tree;

use crate::tree::{Bst, NodeId};

impl<T: Ord + fmt::Display> fmt::Display for Bst<T> {
    /// Renders the tree sideways, one node per line. The right subtree is
    /// printed above its node with `┌──`, the left subtree below with `└──`,
    /// and `│` continues the branch toward the sibling side. Empty trees
    /// render as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            None => Ok(()),
            Some(root) => self.fmt_at(f, root, "", true),
        }
    }
}

impl<T: Ord + fmt::Display> Bst<T> {
    fn fmt_at(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        prefix: &str,
        is_left: bool,
    ) -> fmt::Result {
        if let Some(node) = self.node(id) {
            if let Some(right) = node.right() {
                let above = format!("{prefix}{}", if is_left { "│   " } else { "    " });
                self.fmt_at(f, right, &above, false)?;
            }
            writeln!(
                f,
                "{prefix}{}{}",
                if is_left { "└── " } else { "┌── " },
                node.value()
            )?;
            if let Some(left) = node.left() {
                let below = format!("{prefix}{}", if is_left { "    " } else { "│   " });
                self.fmt_at(f, left, &below, true)?;
            }
        }
        Ok(())
    }

    fn outline_at(&self, id: NodeId) -> Tree<String> {
        match self.node(id) {
            None => Tree::new(String::new()),
            Some(node) => {
                let leaves: Vec<_> = [node.left(), node.right()]
                    .into_iter()
                    .flatten()
                    .map(|child| self.outline_at(child))
                    .collect();
                Tree::new(node.value().to_string()).with_leaves(leaves)
            }
        }
    }
}

/// Conversion into a `termtree` outline for top-down display.
pub trait TreeOutline {
    fn to_outline(&self) -> Tree<String>;
}

impl<T: Ord + fmt::Display> TreeOutline for Bst<T> {
    fn to_outline(&self) -> Tree<String> {
        match self.root() {
            None => Tree::new("(empty)".to_string()),
            Some(root) => self.outline_at(root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_places_right_above_and_left_below() {
        let tree = Bst::from_values(vec![1, 2, 3]);
        let expected = "\
│   ┌── 3
└── 2
    └── 1
";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_empty_tree_renders_empty() {
        let tree: Bst<i64> = Bst::new();
        assert_eq!(tree.to_string(), "");
        assert_eq!(tree.to_outline().to_string().trim_end(), "(empty)");
    }

    #[test]
    fn test_outline_contains_every_value() {
        let tree = Bst::from_values(1..=7);
        let rendered = tree.to_outline().to_string();
        for value in 1..=7 {
            assert!(rendered.contains(&value.to_string()));
        }
    }
}
