//! Categorical training data.
//!
//! A [`Dataset`] is a validated, borrowed view over a table of categorical
//! rows and the parallel label vector. It never copies the caller's data.

use crate::core::error::{Result, SnugError};
use crate::core::types::{Category, FeatureIndex};

/// Validated view over rows of categorical values and their labels.
///
/// Invariants: `rows.len() == labels.len() > 0` and every row has the same
/// number of columns.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a, V, L> {
    rows: &'a [Vec<V>],
    labels: &'a [L],
    num_features: usize,
}

impl<'a, V: Category, L: Category> Dataset<'a, V, L> {
    /// Validate `rows` and `labels` and wrap them.
    pub fn new(rows: &'a [Vec<V>], labels: &'a [L]) -> Result<Self> {
        if rows.is_empty() || labels.is_empty() {
            return Err(SnugError::invalid_input("X or y are empty"));
        }
        if rows.len() != labels.len() {
            return Err(SnugError::invalid_input(format!(
                "X and y have different lengths: {} rows, {} labels",
                rows.len(),
                labels.len()
            )));
        }
        let num_features = rows[0].len();
        check_row_widths(rows, num_features)?;

        Ok(Dataset {
            rows,
            labels,
            num_features,
        })
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of attribute columns in every row.
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// All rows.
    pub fn rows(&self) -> &'a [Vec<V>] {
        self.rows
    }

    /// All labels, parallel to [`rows`](Self::rows).
    pub fn labels(&self) -> &'a [L] {
        self.labels
    }

    /// Value of `feature` in row `row`.
    pub fn value(&self, row: usize, feature: FeatureIndex) -> &'a V {
        &self.rows[row][feature]
    }

    /// Label of row `row`.
    pub fn label(&self, row: usize) -> &'a L {
        &self.labels[row]
    }
}

/// Fail with `InvalidInput` unless every row has exactly `expected` columns.
pub fn check_row_widths<V>(rows: &[Vec<V>], expected: usize) -> Result<()> {
    match rows.iter().position(|row| row.len() != expected) {
        Some(index) => Err(SnugError::invalid_input(format!(
            "row {} has {} columns, expected {}",
            index,
            rows[index].len(),
            expected
        ))),
        None => Ok(()),
    }
}
