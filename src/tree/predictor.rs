//! Tree inference.
//!
//! A row follows the branch matching its value at each split, dropping that
//! column as it descends so the remaining row lines up with the columns seen
//! during training. A value never observed at a split falls back to the
//! majority label of the leaves below that split.

use crate::core::error::{Result, SnugError};
use crate::core::types::Category;
use crate::dataset::check_row_widths;
use crate::tree::criterion::LabelCounts;
use crate::tree::node::Node;
use crate::tree::tree::Tree;

#[cfg(feature = "parallel")]
use crate::core::constants::PARALLEL_PREDICTION_THRESHOLD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Classify one row starting at `node`.
///
/// `row` must have as many columns as the table `node` was grown from.
pub fn predict_row<'t, V: Category, L: Category>(node: &'t Node<V, L>, row: &[V]) -> Result<&'t L> {
    // Original column positions still present in the shrinking row.
    let mut columns: Vec<usize> = (0..row.len()).collect();
    let mut node = node;

    loop {
        let split = match node {
            Node::Leaf { label } => return Ok(label),
            Node::Split(split) => split,
        };

        let feature = split.feature();
        let column = *columns.get(feature).ok_or_else(|| {
            SnugError::invalid_input(format!(
                "row has {} columns but the tree splits on remaining column {}",
                row.len(),
                feature
            ))
        })?;

        match split.child(&row[column]) {
            Some(child) => {
                columns.remove(feature);
                node = child;
            }
            None => {
                log::debug!(
                    "value {} unseen at split on column {}, using subtree majority",
                    row[column],
                    feature
                );
                return subtree_majority(node);
            }
        }
    }
}

/// Majority label over every leaf reachable from `node`.
fn subtree_majority<V: Category, L: Category>(node: &Node<V, L>) -> Result<&L> {
    let leaves = node.leaf_labels();
    LabelCounts::tally(leaves.iter().copied())
        .map(|counts| counts.majority())
        .ok_or_else(|| SnugError::invalid_input("split node has no leaves"))
}

/// Classify every row of `rows`, preserving order.
///
/// Rows must have the width the tree was trained on. Large batches are
/// classified in parallel when the `parallel` feature is enabled.
pub fn predict_rows<V: Category, L: Category>(tree: &Tree<V, L>, rows: &[Vec<V>]) -> Result<Vec<L>> {
    check_row_widths(rows, tree.num_features())?;

    #[cfg(feature = "parallel")]
    {
        if rows.len() >= PARALLEL_PREDICTION_THRESHOLD {
            return rows
                .par_iter()
                .map(|row| predict_row(tree.root(), row).cloned())
                .collect();
        }
    }

    rows.iter()
        .map(|row| predict_row(tree.root(), row).cloned())
        .collect()
}
