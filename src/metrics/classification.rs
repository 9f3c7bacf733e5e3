//! Classification metrics.

use crate::core::types::Category;
use std::collections::{BTreeMap, BTreeSet};

/// Fraction of positions where `y_true` and `y_pred` agree.
///
/// Returns `0.0` when either sequence is empty or the lengths differ; this
/// metric never fails.
pub fn accuracy_score<T: PartialEq>(y_true: &[T], y_pred: &[T]) -> f64 {
    if y_true.is_empty() || y_true.len() != y_pred.len() {
        return 0.0;
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(truth, pred)| truth == pred)
        .count();

    correct as f64 / y_true.len() as f64
}

/// Counts of (true label, predicted label) pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionCounts<L: Category> {
    counts: BTreeMap<(L, L), usize>,
    total: usize,
}

impl<L: Category> ConfusionCounts<L> {
    /// Tally paired labels. Extra elements of the longer slice are ignored.
    pub fn from_predictions(y_true: &[L], y_pred: &[L]) -> Self {
        let mut counts = BTreeMap::new();
        let mut total = 0;
        for (truth, pred) in y_true.iter().zip(y_pred.iter()) {
            *counts.entry((truth.clone(), pred.clone())).or_insert(0) += 1;
            total += 1;
        }
        ConfusionCounts { counts, total }
    }

    /// Number of rows with true label `truth` predicted as `pred`.
    pub fn count(&self, truth: &L, pred: &L) -> usize {
        self.counts
            .get(&(truth.clone(), pred.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Number of correctly predicted rows.
    pub fn correct(&self) -> usize {
        self.counts
            .iter()
            .filter(|((truth, pred), _)| truth == pred)
            .map(|(_, &count)| count)
            .sum()
    }

    /// Number of tallied rows.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Every label seen on either side, in ascending order.
    pub fn labels(&self) -> Vec<L> {
        let mut labels = BTreeSet::new();
        for (truth, pred) in self.counts.keys() {
            labels.insert(truth.clone());
            labels.insert(pred.clone());
        }
        labels.into_iter().collect()
    }

    /// Recall of `label`: correct predictions over rows truly labelled `label`.
    pub fn recall(&self, label: &L) -> f64 {
        let actual: usize = self
            .counts
            .iter()
            .filter(|((truth, _), _)| truth == label)
            .map(|(_, &count)| count)
            .sum();
        if actual == 0 {
            return 0.0;
        }
        self.count(label, label) as f64 / actual as f64
    }

    /// Precision of `label`: correct predictions over rows predicted `label`.
    pub fn precision(&self, label: &L) -> f64 {
        let predicted: usize = self
            .counts
            .iter()
            .filter(|((_, pred), _)| pred == label)
            .map(|(_, &count)| count)
            .sum();
        if predicted == 0 {
            return 0.0;
        }
        self.count(label, label) as f64 / predicted as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accuracy_score() {
        let y = ["yes", "no", "yes", "yes"];
        let pred = ["yes", "no", "no", "yes"];
        assert_relative_eq!(accuracy_score(&y, &pred), 0.75);
    }

    #[test]
    fn test_accuracy_score_lenient_defaults() {
        let empty: [&str; 0] = [];
        assert_eq!(accuracy_score(&empty, &empty), 0.0);
        assert_eq!(accuracy_score(&["a", "b"], &["a"]), 0.0);
    }

    #[test]
    fn test_confusion_counts() {
        let y = vec![0, 0, 1, 1, 1];
        let pred = vec![0, 1, 1, 1, 0];
        let cm = ConfusionCounts::from_predictions(&y, &pred);

        assert_eq!(cm.total(), 5);
        assert_eq!(cm.correct(), 3);
        assert_eq!(cm.count(&1, &0), 1);
        assert_eq!(cm.labels(), vec![0, 1]);
        assert_relative_eq!(cm.recall(&1), 2.0 / 3.0);
        assert_relative_eq!(cm.precision(&0), 0.5);
        assert_eq!(cm.recall(&7), 0.0);
    }
}
