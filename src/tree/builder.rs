//! Recursive ID3 tree induction.
//!
//! Growth at a node stops when its labels are pure, when the depth limit or
//! the supply of columns is exhausted, or when no column has positive
//! information gain; the node then becomes a leaf with the majority label.
//! Otherwise it branches once per observed value of the best column and the
//! column is dropped for the whole subtree.

use crate::config::TreeConfig;
use crate::core::error::{Result, SnugError};
use crate::core::types::{Category, Depth};
use crate::dataset::Dataset;
use crate::tree::criterion::{LabelCounts, NodeSample};
use crate::tree::diagnostics::GainTrace;
use crate::tree::node::{Node, SplitNode};
use crate::tree::tree::Tree;
use std::collections::BTreeMap;

/// Grows decision trees with a fixed depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuilder {
    max_depth: Depth,
}

impl TreeBuilder {
    /// Builder using the config's effective depth limit.
    pub fn new(config: &TreeConfig) -> Self {
        TreeBuilder {
            max_depth: config.effective_max_depth(),
        }
    }

    /// Depth limit applied by this builder.
    pub fn max_depth(&self) -> Depth {
        self.max_depth
    }

    /// Grow a tree on `data`, returning it with the trace of every split
    /// decision.
    pub fn build<V: Category, L: Category>(
        &self,
        data: &Dataset<'_, V, L>,
    ) -> Result<(Tree<V, L>, GainTrace)> {
        let mut trace = GainTrace::new();
        let sample = NodeSample::full(data.rows(), data.labels());
        let root = self.grow(sample, 0, &mut trace)?;

        log::debug!(
            "grew tree over {} rows x {} columns with {} split decisions",
            data.num_rows(),
            data.num_features(),
            trace.len()
        );
        Ok((Tree::new(root, data.num_features()), trace))
    }

    fn grow<V: Category, L: Category>(
        &self,
        sample: NodeSample<'_, V, L>,
        depth: Depth,
        trace: &mut GainTrace,
    ) -> Result<Node<V, L>> {
        let counts = LabelCounts::tally(sample.labels())
            .ok_or_else(|| SnugError::invalid_input("cannot grow a node from an empty sample"))?;

        if counts.is_pure() {
            return Ok(Node::leaf(counts.majority().clone()));
        }

        if depth >= self.max_depth || sample.num_columns() == 0 {
            log::trace!(
                "depth {}: stopping with {} labels over {} columns",
                depth,
                counts.num_distinct(),
                sample.num_columns()
            );
            return Ok(Node::leaf(counts.majority().clone()));
        }

        let record = sample.best_split(depth);
        let chosen = record.chosen();
        log::debug!(
            "depth {}: best column {:?} with gain {:?} over {} rows",
            depth,
            record.candidate(),
            record.best_gain(),
            sample.num_rows()
        );
        trace.push(record);

        let feature = match chosen {
            Some(feature) => feature,
            None => return Ok(Node::leaf(counts.majority().clone())),
        };

        let mut children = BTreeMap::new();
        for (value, indices) in sample.partition(feature) {
            let child = self.grow(sample.child(indices, feature), depth + 1, trace)?;
            children.insert(value.clone(), child);
        }

        Ok(Node::Split(SplitNode::new(feature, children)))
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(&TreeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(
        rows: &[Vec<&'static str>],
        labels: &[&'static str],
        max_depth: i32,
    ) -> (Tree<&'static str, &'static str>, GainTrace) {
        let data = Dataset::new(rows, labels).unwrap();
        TreeBuilder::new(&TreeConfig::with_max_depth(max_depth))
            .build(&data)
            .unwrap()
    }

    #[test]
    fn test_pure_labels_give_single_leaf() {
        let rows = vec![vec!["a"], vec!["b"]];
        let (tree, trace) = build(&rows, &["yes", "yes"], 3);
        assert_eq!(tree.root(), &Node::leaf("yes"));
        assert!(trace.is_empty());
    }

    #[test]
    fn test_depth_limit_forces_majority_leaf() {
        let rows = vec![vec!["a"], vec!["b"], vec!["b"]];
        let labels = ["x", "y", "y"];

        let (tree, _) = build(&rows, &labels, 1);
        assert_eq!(tree.depth(), 1);

        let builder = TreeBuilder { max_depth: 0 };
        let data = Dataset::new(&rows, &labels).unwrap();
        let (tree, trace) = builder.build(&data).unwrap();
        assert_eq!(tree.root(), &Node::leaf("y"));
        assert!(trace.is_empty());
    }

    #[test]
    fn test_non_positive_depth_uses_default() {
        assert_eq!(TreeBuilder::new(&TreeConfig::with_max_depth(0)).max_depth(), 5);
        assert_eq!(TreeBuilder::new(&TreeConfig::with_max_depth(-1)).max_depth(), 5);
        assert_eq!(TreeBuilder::default().max_depth(), 5);
    }

    #[test]
    fn test_uninformative_columns_give_majority_leaf() {
        let rows = vec![vec!["same"], vec!["same"], vec!["same"]];
        let (tree, trace) = build(&rows, &["b", "a", "b"], 3);
        assert_eq!(tree.root(), &Node::leaf("b"));
        // the decision is still traced
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.records()[0].chosen(), None);
    }

    #[test]
    fn test_exhausted_columns_give_majority_leaf() {
        // Identical rows with conflicting labels: one split, then no columns.
        let rows = vec![vec!["a"], vec!["a"], vec!["b"]];
        let (tree, _) = build(&rows, &["p", "q", "q"], 5);
        let split = tree.root().as_split().unwrap();
        assert_eq!(split.child(&"a"), Some(&Node::leaf("p")));
        assert_eq!(split.child(&"b"), Some(&Node::leaf("q")));
    }

    #[test]
    fn test_chosen_column_is_removed_for_children() {
        let rows = vec![
            vec!["s", "h"],
            vec!["s", "c"],
            vec!["r", "h"],
            vec!["r", "c"],
        ];
        // label depends on both columns (xor-like), column 0 first
        let labels = ["n", "y", "y", "y"];
        let (tree, trace) = build(&rows, &labels, 5);

        let root = tree.root().as_split().unwrap();
        assert_eq!(root.feature(), 0);
        let inner = root.child(&"s").unwrap().as_split().unwrap();
        // the remaining column is now at position 0
        assert_eq!(inner.feature(), 0);
        assert_eq!(trace.records()[1].gains().len(), 1);
    }
}
