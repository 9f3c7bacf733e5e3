//! Core trait definitions for SnugML.
//!
//! Every model in the crate follows the same fit/predict contract through
//! [`Estimator`]. [`Regressor`] and [`Classifier`] add the evaluation step
//! appropriate to the kind of target.

use crate::core::error::Result;
use crate::core::types::Category;
use crate::metrics::classification::accuracy_score;
use crate::metrics::regression::{evaluate_regression, RegressionMetrics};

/// Uniform fit/predict contract shared by all models.
pub trait Estimator {
    /// Input accepted by `fit` and `predict` (e.g. `[f64]` or `[Vec<V>]`).
    type Features: ?Sized;
    /// Training targets accepted by `fit`.
    type Targets: ?Sized;
    /// Value produced by `predict`.
    type Output;

    /// Train the model, replacing any previously fitted state.
    fn fit(&mut self, features: &Self::Features, targets: &Self::Targets) -> Result<()>;

    /// Predict targets for the given features.
    ///
    /// Fails with `ModelNotTrained` before the first successful `fit`.
    fn predict(&self, features: &Self::Features) -> Result<Self::Output>;

    /// Whether `fit` has completed successfully at least once.
    fn is_fitted(&self) -> bool;

    /// Human-readable model name, used in error messages and logs.
    fn name(&self) -> &'static str;
}

/// Estimators with real-valued targets.
pub trait Regressor: Estimator<Targets = [f64], Output = Vec<f64>> {
    /// Predict `features` and compare against `targets`.
    fn evaluate(&self, features: &Self::Features, targets: &[f64]) -> Result<RegressionMetrics> {
        let predictions = self.predict(features)?;
        evaluate_regression(targets, &predictions)
    }
}

/// Estimators with categorical targets.
pub trait Classifier<L: Category>: Estimator<Targets = [L], Output = Vec<L>> {
    /// Accuracy of the predictions for `features` against `targets`.
    fn score(&self, features: &Self::Features, targets: &[L]) -> Result<f64> {
        let predictions = self.predict(features)?;
        Ok(accuracy_score(targets, &predictions))
    }
}
