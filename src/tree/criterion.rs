//! Entropy and information-gain split criterion.
//!
//! All functions here are pure. The public entry points take a plain table
//! (`rows`, `labels`); the tree builder uses [`NodeSample`] to evaluate the
//! same quantities on the rows and columns that reach a node without copying
//! the table.

use crate::core::error::{Result, SnugError};
use crate::core::types::{Category, Depth, FeatureIndex};
use crate::dataset::Dataset;
use crate::tree::diagnostics::SplitRecord;
use std::collections::BTreeMap;

/// Label frequencies of a non-empty sample together with its majority label.
#[derive(Debug, Clone)]
pub(crate) struct LabelCounts<'a, L> {
    counts: BTreeMap<&'a L, usize>,
    majority: &'a L,
}

impl<'a, L: Category> LabelCounts<'a, L> {
    /// Count `labels`. Returns `None` for an empty sample.
    pub(crate) fn tally<I>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a L>,
    {
        let mut counts: BTreeMap<&'a L, usize> = BTreeMap::new();
        for label in labels {
            *counts.entry(label).or_insert(0) += 1;
        }

        // Ascending label order with a strict comparison: ties go to the
        // smallest label.
        let mut majority: Option<(&'a L, usize)> = None;
        for (&label, &count) in &counts {
            if majority.map_or(true, |(_, best)| count > best) {
                majority = Some((label, count));
            }
        }

        majority.map(|(majority, _)| LabelCounts { counts, majority })
    }

    /// Whether every label in the sample is the same.
    pub(crate) fn is_pure(&self) -> bool {
        self.counts.len() == 1
    }

    /// Most frequent label, smallest label on ties.
    pub(crate) fn majority(&self) -> &'a L {
        self.majority
    }

    /// Number of distinct labels.
    pub(crate) fn num_distinct(&self) -> usize {
        self.counts.len()
    }
}

/// The rows and columns reaching one node of the tree under construction.
///
/// `columns` maps the node's relative column positions to columns of the
/// original table; dropping a split column removes it from this list, which
/// is how rows "shrink" by one column per level without being copied.
#[derive(Debug, Clone)]
pub(crate) struct NodeSample<'a, V, L> {
    rows: &'a [Vec<V>],
    labels: &'a [L],
    indices: Vec<usize>,
    columns: Vec<FeatureIndex>,
}

impl<'a, V: Category, L: Category> NodeSample<'a, V, L> {
    /// Sample covering the whole table.
    pub(crate) fn full(rows: &'a [Vec<V>], labels: &'a [L]) -> Self {
        let width = rows.first().map_or(0, Vec::len);
        NodeSample {
            rows,
            labels,
            indices: (0..rows.len().min(labels.len())).collect(),
            columns: (0..width).collect(),
        }
    }

    /// Number of columns still available for splitting.
    pub(crate) fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows in the sample.
    pub(crate) fn num_rows(&self) -> usize {
        self.indices.len()
    }

    /// Labels of the rows in the sample.
    pub(crate) fn labels(&self) -> impl Iterator<Item = &'a L> + '_ {
        let labels = self.labels;
        self.indices.iter().map(move |&i| &labels[i])
    }

    /// Group row indices by their value in relative column `feature`.
    pub(crate) fn partition(&self, feature: FeatureIndex) -> BTreeMap<&'a V, Vec<usize>> {
        let column = self.columns[feature];
        let rows = self.rows;
        let mut groups: BTreeMap<&'a V, Vec<usize>> = BTreeMap::new();
        for &i in &self.indices {
            groups.entry(&rows[i][column]).or_default().push(i);
        }
        groups
    }

    /// The sample of rows `indices` with relative column `feature` dropped.
    pub(crate) fn child(&self, indices: Vec<usize>, feature: FeatureIndex) -> Self {
        let mut columns = self.columns.clone();
        columns.remove(feature);
        NodeSample {
            rows: self.rows,
            labels: self.labels,
            indices,
            columns,
        }
    }

    /// Information gain of splitting this sample on relative column `feature`.
    pub(crate) fn information_gain(&self, feature: FeatureIndex) -> f64 {
        let total = self.num_rows() as f64;
        let labels = self.labels;
        let weighted: f64 = self
            .partition(feature)
            .values()
            .map(|subset| {
                let share = subset.len() as f64 / total;
                share * entropy_of(subset.iter().map(|&i| &labels[i]))
            })
            .sum();

        entropy_of(self.labels()) - weighted
    }

    /// Evaluate every remaining column, left to right.
    pub(crate) fn best_split(&self, depth: Depth) -> SplitRecord {
        let mut record = SplitRecord::new(depth, self.num_rows());
        for feature in 0..self.num_columns() {
            let gain = self.information_gain(feature);
            log::trace!("depth {}: gain of column {} = {:.6}", depth, feature, gain);
            record.push_gain(gain);
        }
        record
    }
}

/// Shannon entropy, in bits, of a sequence of labels.
fn entropy_of<'a, L, I>(labels: I) -> f64
where
    L: Category + 'a,
    I: IntoIterator<Item = &'a L>,
{
    // Ordered so the floating-point sum is the same on every run.
    let mut counts: BTreeMap<&'a L, usize> = BTreeMap::new();
    let mut total = 0usize;
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Shannon entropy, in bits, of the empirical label distribution.
///
/// `0.0` for a single-label (or empty) sequence; `1.0` for two equally
/// frequent labels.
pub fn entropy<L: Category>(labels: &[L]) -> f64 {
    entropy_of(labels)
}

/// Reduction in entropy obtained by partitioning `rows` on `feature`.
///
/// Fails with `InvalidInput` when the table is empty or ragged, the lengths
/// differ, or `feature` is not a column of `rows`.
pub fn information_gain<V: Category, L: Category>(
    rows: &[Vec<V>],
    labels: &[L],
    feature: FeatureIndex,
) -> Result<f64> {
    let data = Dataset::new(rows, labels)?;
    if feature >= data.num_features() {
        return Err(SnugError::invalid_input(format!(
            "feature {} out of range for {} columns",
            feature,
            data.num_features()
        )));
    }
    Ok(NodeSample::full(data.rows(), data.labels()).information_gain(feature))
}

/// Evaluate every column of `rows` and pick the one with the highest gain.
///
/// The first column reaching the maximum wins. [`SplitRecord::chosen`] is
/// `None` when there are no columns or the best gain is not positive.
/// Invalid tables fail as in [`information_gain`].
pub fn best_split<V: Category, L: Category>(rows: &[Vec<V>], labels: &[L]) -> Result<SplitRecord> {
    let data = Dataset::new(rows, labels)?;
    Ok(NodeSample::full(data.rows(), data.labels()).best_split(0))
}

/// Most frequent label; ties go to the smallest label. `None` when empty.
pub fn majority_label<L: Category>(labels: &[L]) -> Option<L> {
    LabelCounts::tally(labels).map(|counts| counts.majority().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_entropy_pure_and_balanced() {
        assert_eq!(entropy(&["a", "a", "a"]), 0.0);
        assert_relative_eq!(entropy(&["a", "b"]), 1.0);
        assert_relative_eq!(entropy(&[0, 1, 2, 3]), 2.0);
    }

    #[test]
    fn test_entropy_skewed() {
        // p = 1/4, 3/4
        let expected = -(0.25f64 * 0.25f64.log2() + 0.75 * 0.75f64.log2());
        assert_relative_eq!(entropy(&[1, 0, 0, 0]), expected);
    }

    #[test]
    fn test_information_gain_perfect_separation() {
        let rows = vec![vec!["x", "p"], vec!["y", "p"], vec!["x", "q"], vec!["y", "q"]];
        let labels = ["a", "b", "a", "b"];

        assert_relative_eq!(information_gain(&rows, &labels, 0).unwrap(), entropy(&labels));
        assert_relative_eq!(information_gain(&rows, &labels, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_best_split_picks_highest_gain() {
        let rows = vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]];
        let labels = [0, 1, 0, 1];

        let record = best_split(&rows, &labels).unwrap();
        assert_eq!(record.chosen(), Some(1));
        assert_eq!(record.gains().len(), 2);
    }

    #[test]
    fn test_best_split_tie_goes_to_first_column() {
        let rows = vec![vec![0, 5], vec![1, 6]];
        let labels = ["n", "y"];

        let record = best_split(&rows, &labels).unwrap();
        assert_relative_eq!(record.gains()[0], record.gains()[1]);
        assert_eq!(record.chosen(), Some(0));
    }

    #[test]
    fn test_best_split_no_informative_column() {
        let rows = vec![vec![1], vec![1]];
        let labels = ["a", "b"];
        let record = best_split(&rows, &labels).unwrap();
        assert_eq!(record.candidate(), Some(0));
        assert_eq!(record.chosen(), None);

        let empty: Vec<Vec<i32>> = vec![vec![], vec![]];
        assert_eq!(best_split(&empty, &labels).unwrap().chosen(), None);
    }

    #[test]
    fn test_invalid_tables_are_rejected() {
        let rows = vec![vec!["x", "p"], vec!["y"]];
        let labels = ["a", "b"];
        assert!(matches!(
            information_gain(&rows, &labels, 0),
            Err(SnugError::InvalidInput { .. })
        ));
        assert!(matches!(best_split(&rows, &labels), Err(SnugError::InvalidInput { .. })));

        let rows = vec![vec!["x"], vec!["y"]];
        assert!(information_gain(&rows, &labels, 1).is_err());
        assert!(information_gain(&rows, &labels[..1], 0).is_err());
        assert!(best_split::<&str, &str>(&[], &[]).is_err());
    }

    #[test]
    fn test_majority_label_tie_break() {
        assert_eq!(majority_label(&["b", "a", "b"]), Some("b"));
        assert_eq!(majority_label(&["b", "a"]), Some("a"));
        assert_eq!(majority_label::<i32>(&[]), None);
    }

    #[test]
    fn test_node_sample_child_drops_column() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let labels = [0, 1];
        let sample = NodeSample::full(&rows, &labels);

        let child = sample.child(vec![1], 1);
        assert_eq!(child.num_columns(), 2);
        assert_eq!(child.num_rows(), 1);
        let groups = child.partition(1);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![&6]);
    }
}
