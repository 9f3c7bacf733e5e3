//! Common test utilities for SnugML integration tests.

#![allow(dead_code)]

use rand::prelude::*;
use snugml::{Category, Node};

/// Turn a table of string slices into owned rows.
pub fn owned_rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect()
}

/// Turn string slices into owned labels.
pub fn owned_labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|v| v.to_string()).collect()
}

/// Three-row weather table: (outlook, temperature) -> play.
pub fn weather() -> (Vec<Vec<String>>, Vec<String>) {
    (
        owned_rows(&[&["sunny", "hot"], &["rain", "cool"], &["sunny", "cool"]]),
        owned_labels(&["no", "yes", "yes"]),
    )
}

/// The classic fourteen-day play-tennis table:
/// (outlook, temperature, humidity, wind) -> play.
pub fn play_tennis() -> (Vec<Vec<String>>, Vec<String>) {
    let rows = owned_rows(&[
        &["Sunny", "Hot", "High", "Weak"],
        &["Sunny", "Hot", "High", "Strong"],
        &["Overcast", "Hot", "High", "Weak"],
        &["Rain", "Mild", "High", "Weak"],
        &["Rain", "Cool", "Normal", "Weak"],
        &["Rain", "Cool", "Normal", "Strong"],
        &["Overcast", "Cool", "Normal", "Strong"],
        &["Sunny", "Mild", "High", "Weak"],
        &["Sunny", "Cool", "Normal", "Weak"],
        &["Rain", "Mild", "Normal", "Weak"],
        &["Sunny", "Mild", "Normal", "Strong"],
        &["Overcast", "Mild", "High", "Strong"],
        &["Overcast", "Hot", "Normal", "Weak"],
        &["Rain", "Mild", "High", "Strong"],
    ]);
    let labels = owned_labels(&[
        "No", "No", "Yes", "Yes", "Yes", "No", "Yes", "No", "Yes", "Yes", "Yes", "Yes", "Yes",
        "No",
    ]);
    (rows, labels)
}

/// Random categorical table with values in `0..num_values` and a label that
/// is a function of the first two columns.
pub fn create_categorical_data(
    num_rows: usize,
    num_features: usize,
    num_values: u8,
    seed: u64,
) -> (Vec<Vec<u8>>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<u8>> = (0..num_rows)
        .map(|_| (0..num_features).map(|_| rng.gen_range(0..num_values)).collect())
        .collect();
    let labels = rows
        .iter()
        .map(|row| {
            let a = row.first().copied().unwrap_or(0);
            let b = row.get(1).copied().unwrap_or(0);
            // column 0 decides alone unless it is 2, then column 1 decides
            if a == 2 {
                b
            } else {
                a
            }
        })
        .collect();
    (rows, labels)
}

/// Two Gaussian-ish clusters around `(0, 0)` and `(5, 5)`.
pub fn create_clusters(per_class: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(per_class * 2);
    let mut labels = Vec::with_capacity(per_class * 2);
    for (center, label) in [(0.0, "left"), (5.0, "right")] {
        for _ in 0..per_class {
            rows.push(vec![
                center + rng.gen_range(-1.0..1.0),
                center + rng.gen_range(-1.0..1.0),
            ]);
            labels.push(label.to_string());
        }
    }
    (rows, labels)
}

/// Assert that every split at depth `d` uses a column index below
/// `num_features - d`, and that no leaf lies deeper than `max_depth`.
pub fn assert_tree_invariants<V: Category, L: Category>(
    node: &Node<V, L>,
    num_features: usize,
    max_depth: usize,
) {
    fn walk<V: Category, L: Category>(node: &Node<V, L>, depth: usize, num_features: usize, max_depth: usize) {
        assert!(depth <= max_depth, "leaf at depth {} exceeds limit {}", depth, max_depth);
        if let Some(split) = node.as_split() {
            assert!(
                split.feature() < num_features - depth,
                "split on column {} at depth {} with only {} columns left",
                split.feature(),
                depth,
                num_features - depth
            );
            assert!(split.num_children() > 0);
            for (_, child) in split.children() {
                walk(child, depth + 1, num_features, max_depth);
            }
        }
    }
    walk(node, 0, num_features, max_depth);
}

/// Create test data with a common shape
#[macro_export]
macro_rules! create_test_data {
    (categorical, $rows:expr, $features:expr) => {{
        common::create_categorical_data($rows, $features, 3, 42)
    }};

    (clusters, $per_class:expr) => {{
        common::create_clusters($per_class, 7)
    }};
}
