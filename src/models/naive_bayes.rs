//! Gaussian Naive Bayes over real-valued features.
//!
//! Each class keeps its prior and a per-feature normal distribution. Scores
//! are summed in log space so long feature vectors do not underflow.

use crate::config::NaiveBayesConfig;
use crate::core::error::{Result, SnugError};
use crate::core::traits::{Classifier, Estimator};
use crate::core::types::Category;
use crate::dataset::check_row_widths;
use crate::{ensure, invalid_input};
use std::collections::BTreeMap;
use std::f64::consts::PI;

const MODEL_NAME: &str = "GaussianNB";

/// Mean and standard deviation of one feature within one class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStat {
    /// Sample mean
    pub mean: f64,
    /// Population standard deviation, floored at `min_std`
    pub std_dev: f64,
}

impl FeatureStat {
    fn log_density(&self, x: f64) -> f64 {
        let z = (x - self.mean) / self.std_dev;
        -0.5 * z * z - (self.std_dev * (2.0 * PI).sqrt()).ln()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ClassModel {
    log_prior: f64,
    features: Vec<FeatureStat>,
}

/// Gaussian Naive Bayes classifier.
#[derive(Debug, Clone)]
pub struct GaussianNB<L = String> {
    config: NaiveBayesConfig,
    classes: BTreeMap<L, ClassModel>,
    num_features: usize,
}

impl<L: Category> GaussianNB<L> {
    /// Unfitted classifier.
    pub fn new(config: NaiveBayesConfig) -> Self {
        GaussianNB {
            config,
            classes: BTreeMap::new(),
            num_features: 0,
        }
    }

    /// Estimate priors and per-class feature distributions.
    ///
    /// Fails with `InvalidParameter` unless `min_std` is positive and finite.
    pub fn fit(&mut self, rows: &[Vec<f64>], labels: &[L]) -> Result<()> {
        let min_std = self.config.min_std;
        ensure!(
            min_std > 0.0 && min_std.is_finite(),
            SnugError::invalid_parameter(
                "naive_bayes.min_std",
                min_std.to_string(),
                "must be positive and finite"
            )
        );
        ensure!(
            rows.len() == labels.len(),
            invalid_input!(
                "X and y have different lengths: {} rows, {} labels",
                rows.len(),
                labels.len()
            )
        );
        ensure!(!rows.is_empty(), invalid_input!("X or y are empty"));
        let num_features = rows[0].len();
        check_row_widths(rows, num_features)?;

        let mut members: BTreeMap<&L, Vec<&[f64]>> = BTreeMap::new();
        for (row, label) in rows.iter().zip(labels) {
            members.entry(label).or_default().push(row);
        }

        let total = rows.len() as f64;
        let mut classes = BTreeMap::new();
        for (label, class_rows) in members {
            let count = class_rows.len() as f64;
            let features = (0..num_features)
                .map(|j| {
                    let mean = class_rows.iter().map(|row| row[j]).sum::<f64>() / count;
                    let variance = class_rows
                        .iter()
                        .map(|row| (row[j] - mean).powi(2))
                        .sum::<f64>()
                        / count;
                    let mut std_dev = variance.sqrt();
                    if std_dev == 0.0 {
                        log::warn!(
                            "feature {} is constant within class {}; using std {:e}",
                            j,
                            label,
                            self.config.min_std
                        );
                        std_dev = self.config.min_std;
                    }
                    FeatureStat { mean, std_dev }
                })
                .collect();

            classes.insert(
                label.clone(),
                ClassModel {
                    log_prior: (count / total).ln(),
                    features,
                },
            );
        }

        log::info!(
            "{} fitted on {} rows: {} classes, {} features",
            MODEL_NAME,
            rows.len(),
            classes.len(),
            num_features
        );
        self.classes = classes;
        self.num_features = num_features;
        Ok(())
    }

    /// Most probable class for every row.
    pub fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<L>> {
        if !self.is_fitted() {
            return Err(SnugError::not_trained(MODEL_NAME));
        }
        check_row_widths(rows, self.num_features)?;
        rows.iter().map(|row| self.predict_row(row)).collect()
    }

    /// Unnormalised log posterior of every class for `row`.
    pub fn log_scores(&self, row: &[f64]) -> Result<Vec<(L, f64)>> {
        if !self.is_fitted() {
            return Err(SnugError::not_trained(MODEL_NAME));
        }
        if row.len() != self.num_features {
            return Err(SnugError::invalid_input(format!(
                "row has {} columns, expected {}",
                row.len(),
                self.num_features
            )));
        }
        Ok(self
            .classes
            .iter()
            .map(|(label, model)| (label.clone(), score(model, row)))
            .collect())
    }

    fn predict_row(&self, row: &[f64]) -> Result<L> {
        // Strictly greater keeps the smallest class on ties.
        let mut best: Option<(&L, f64)> = None;
        for (label, model) in &self.classes {
            let s = score(model, row);
            if best.map_or(true, |(_, b)| s > b) {
                best = Some((label, s));
            }
        }
        best.map(|(label, _)| label.clone())
            .ok_or_else(|| SnugError::not_trained(MODEL_NAME))
    }

    /// Classes seen during fit, in ascending order.
    pub fn classes(&self) -> Vec<&L> {
        self.classes.keys().collect()
    }

    /// Prior probability of `label`, if it was seen during fit.
    pub fn prior(&self, label: &L) -> Option<f64> {
        self.classes.get(label).map(|m| m.log_prior.exp())
    }

    /// Per-feature distribution of `label`, if it was seen during fit.
    pub fn feature_stats(&self, label: &L) -> Option<&[FeatureStat]> {
        self.classes.get(label).map(|m| m.features.as_slice())
    }

    /// Whether the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        !self.classes.is_empty()
    }
}

fn score(model: &ClassModel, row: &[f64]) -> f64 {
    model.log_prior
        + model
            .features
            .iter()
            .zip(row)
            .map(|(stat, &x)| stat.log_density(x))
            .sum::<f64>()
}

impl<L: Category> Default for GaussianNB<L> {
    fn default() -> Self {
        Self::new(NaiveBayesConfig::default())
    }
}

impl<L: Category> Estimator for GaussianNB<L> {
    type Features = [Vec<f64>];
    type Targets = [L];
    type Output = Vec<L>;

    fn fit(&mut self, features: &[Vec<f64>], targets: &[L]) -> Result<()> {
        GaussianNB::fit(self, features, targets)
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<L>> {
        GaussianNB::predict(self, features)
    }

    fn is_fitted(&self) -> bool {
        GaussianNB::is_fitted(self)
    }

    fn name(&self) -> &'static str {
        MODEL_NAME
    }
}

impl<L: Category> Classifier<L> for GaussianNB<L> {}
