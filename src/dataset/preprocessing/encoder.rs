//! Label encoding between categorical values and dense class indices.

use crate::core::error::{Result, SnugError};
use crate::core::types::{Category, ClassIndex};
use std::collections::HashMap;

/// Bijection between distinct labels and `0..num_classes`.
///
/// Indices are assigned in first-seen order, so `fit(["b", "a", "b"])`
/// maps `"b" -> 0` and `"a" -> 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder<T: Category> {
    classes: Vec<T>,
    class_to_index: HashMap<T, ClassIndex>,
}

impl<T: Category> LabelEncoder<T> {
    /// Create an unfitted encoder.
    pub fn new() -> Self {
        LabelEncoder {
            classes: Vec::new(),
            class_to_index: HashMap::new(),
        }
    }

    /// Learn the alphabet of `labels`, discarding any previous one.
    pub fn fit(&mut self, labels: &[T]) -> &mut Self {
        self.classes.clear();
        self.class_to_index.clear();
        for label in labels {
            if !self.class_to_index.contains_key(label) {
                self.class_to_index.insert(label.clone(), self.classes.len());
                self.classes.push(label.clone());
            }
        }
        log::debug!("LabelEncoder fitted with {} classes", self.classes.len());
        self
    }

    /// Map labels to their indices.
    pub fn transform(&self, labels: &[T]) -> Result<Vec<ClassIndex>> {
        self.ensure_fitted()?;
        labels
            .iter()
            .map(|label| {
                self.class_to_index
                    .get(label)
                    .copied()
                    .ok_or_else(|| SnugError::unknown_label(label))
            })
            .collect()
    }

    /// Map indices back to their labels.
    pub fn inverse_transform(&self, indices: &[ClassIndex]) -> Result<Vec<T>> {
        indices
            .iter()
            .map(|&index| {
                self.classes
                    .get(index)
                    .cloned()
                    .ok_or_else(|| SnugError::unknown_index(index))
            })
            .collect()
    }

    /// `fit` followed by `transform` on the same labels.
    pub fn fit_transform(&mut self, labels: &[T]) -> Result<Vec<ClassIndex>> {
        self.fit(labels);
        self.transform(labels)
    }

    /// The fitted alphabet in index order.
    pub fn classes(&self) -> &[T] {
        &self.classes
    }

    /// Size of the fitted alphabet.
    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Whether an alphabet has been learnt.
    pub fn is_fitted(&self) -> bool {
        !self.classes.is_empty()
    }

    fn ensure_fitted(&self) -> Result<()> {
        if self.is_fitted() {
            Ok(())
        } else {
            Err(SnugError::not_trained("LabelEncoder"))
        }
    }
}

impl<T: Category> Default for LabelEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}
