//! Tree node representation.
//!
//! A node is either a leaf carrying a label or a multi-way split on one
//! categorical column. Each parent owns its children outright.

use crate::core::types::{Category, FeatureIndex};
use std::collections::BTreeMap;

/// Decision tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<V, L> {
    /// Terminal node predicting a single label.
    Leaf {
        /// Predicted label
        label: L,
    },
    /// Internal node branching on one column.
    Split(SplitNode<V, L>),
}

/// Multi-way split on a categorical column.
///
/// `feature` indexes the columns remaining at this depth: every column
/// chosen by an ancestor has already been removed from the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNode<V, L> {
    feature: FeatureIndex,
    children: BTreeMap<V, Node<V, L>>,
}

impl<V: Category, L: Category> SplitNode<V, L> {
    /// Split on `feature` with one child per observed value.
    pub fn new(feature: FeatureIndex, children: BTreeMap<V, Node<V, L>>) -> Self {
        SplitNode { feature, children }
    }

    /// Relative column this node branches on.
    pub fn feature(&self) -> FeatureIndex {
        self.feature
    }

    /// Child for `value`, if the value was observed during training.
    pub fn child(&self, value: &V) -> Option<&Node<V, L>> {
        self.children.get(value)
    }

    /// Observed values of the split column, in ascending order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.children.keys()
    }

    /// `(value, child)` pairs in ascending value order.
    pub fn children(&self) -> impl Iterator<Item = (&V, &Node<V, L>)> {
        self.children.iter()
    }

    /// Number of branches.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }
}

impl<V: Category, L: Category> Node<V, L> {
    /// Leaf predicting `label`.
    pub fn leaf(label: L) -> Self {
        Node::Leaf { label }
    }

    /// Returns true if this node is a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Label of a leaf, `None` for a split.
    pub fn label(&self) -> Option<&L> {
        match self {
            Node::Leaf { label } => Some(label),
            Node::Split(_) => None,
        }
    }

    /// Split payload, `None` for a leaf.
    pub fn as_split(&self) -> Option<&SplitNode<V, L>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Split(split) => Some(split),
        }
    }

    /// Labels of every leaf in this subtree, one entry per leaf, in
    /// depth-first ascending-value order.
    pub fn leaf_labels(&self) -> Vec<&L> {
        let mut labels = Vec::new();
        self.collect_leaf_labels(&mut labels);
        labels
    }

    fn collect_leaf_labels<'t>(&'t self, out: &mut Vec<&'t L>) {
        match self {
            Node::Leaf { label } => out.push(label),
            Node::Split(split) => {
                for child in split.children.values() {
                    child.collect_leaf_labels(out);
                }
            }
        }
    }

    /// Number of leaves in this subtree.
    pub fn num_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split(split) => split.children.values().map(Node::num_leaves).sum(),
        }
    }

    /// Number of nodes (leaves and splits) in this subtree.
    pub fn num_nodes(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Split(split) => 1 + split.children.values().map(Node::num_nodes).sum::<usize>(),
        }
    }

    /// Length in edges of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split(split) => {
                1 + split.children.values().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Node<&'static str, &'static str> {
        let mut inner = BTreeMap::new();
        inner.insert("hot", Node::leaf("no"));
        inner.insert("cool", Node::leaf("yes"));

        let mut root = BTreeMap::new();
        root.insert("sunny", Node::Split(SplitNode::new(0, inner)));
        root.insert("rain", Node::leaf("yes"));
        Node::Split(SplitNode::new(0, root))
    }

    #[test]
    fn test_leaf_accessors() {
        let leaf: Node<i32, &str> = Node::leaf("a");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.label(), Some(&"a"));
        assert!(leaf.as_split().is_none());
        assert_eq!(leaf.depth(), 0);
    }

    #[test]
    fn test_tree_statistics() {
        let tree = sample_tree();
        assert!(!tree.is_leaf());
        assert_eq!(tree.num_leaves(), 3);
        assert_eq!(tree.num_nodes(), 5);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_leaf_labels_in_value_order() {
        let tree = sample_tree();
        // "rain" < "sunny"; within "sunny", "cool" < "hot"
        assert_eq!(tree.leaf_labels(), vec![&"yes", &"yes", &"no"]);
    }

    #[test]
    fn test_split_lookup() {
        let tree = sample_tree();
        let split = tree.as_split().unwrap();
        assert_eq!(split.feature(), 0);
        assert_eq!(split.num_children(), 2);
        assert!(split.child(&"sunny").is_some());
        assert!(split.child(&"overcast").is_none());
        assert_eq!(split.values().copied().collect::<Vec<_>>(), vec!["rain", "sunny"]);
    }
}
