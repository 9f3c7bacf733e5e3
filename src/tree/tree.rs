//! Decision tree structure.
//!
//! A [`Tree`] is immutable once built; re-training replaces it wholesale.

use crate::core::error::{Result, SnugError};
use crate::core::types::Category;
use crate::tree::node::Node;
use crate::tree::predictor;
use std::fmt::{self, Write};

/// A trained categorical decision tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<V, L> {
    root: Node<V, L>,
    num_features: usize,
}

static_assertions::assert_impl_all!(Tree<String, String>: Send, Sync);

impl<V: Category, L: Category> Tree<V, L> {
    /// Wrap a root node grown from a table with `num_features` columns.
    pub fn new(root: Node<V, L>, num_features: usize) -> Self {
        Tree { root, num_features }
    }

    /// Root node.
    pub fn root(&self) -> &Node<V, L> {
        &self.root
    }

    /// Number of columns the tree was trained on.
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Returns the number of leaf nodes in the tree.
    pub fn num_leaves(&self) -> usize {
        self.root.num_leaves()
    }

    /// Returns the number of nodes in the tree.
    pub fn num_nodes(&self) -> usize {
        self.root.num_nodes()
    }

    /// Length in edges of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Classify one row.
    pub fn predict_row(&self, row: &[V]) -> Result<&L> {
        if row.len() != self.num_features {
            return Err(SnugError::invalid_input(format!(
                "row has {} columns, expected {}",
                row.len(),
                self.num_features
            )));
        }
        predictor::predict_row(&self.root, row)
    }

    /// Classify every row, preserving order.
    pub fn predict(&self, rows: &[Vec<V>]) -> Result<Vec<L>> {
        predictor::predict_rows(self, rows)
    }

    /// Indented outline of the tree.
    ///
    /// ```text
    /// Feature 0:
    ///   - Value rain:
    ///     Leaf: yes
    ///   - Value sunny:
    ///     Feature 0:
    ///     ...
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = render_node(&self.root, 0, &mut out);
        out
    }
}

fn render_node<V: Category, L: Category>(
    node: &Node<V, L>,
    depth: usize,
    out: &mut String,
) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        Node::Leaf { label } => writeln!(out, "{}Leaf: {}", indent, label),
        Node::Split(split) => {
            writeln!(out, "{}Feature {}:", indent, split.feature())?;
            for (value, child) in split.children() {
                writeln!(out, "{}  - Value {}:", indent, value)?;
                render_node(child, depth + 2, out)?;
            }
            Ok(())
        }
    }
}

impl<V: Category, L: Category> fmt::Display for Tree<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
