//! Simple linear regression, `y = m·x + b`, fitted by closed-form least
//! squares.

use crate::core::error::{Result, SnugError};
use crate::core::traits::{Estimator, Regressor};
use crate::{ensure, invalid_input};

const MODEL_NAME: &str = "LinearRegression";

/// Fitted line parameters
#[derive(Debug, Clone, Copy, PartialEq)]
struct Line {
    slope: f64,
    intercept: f64,
}

/// One-dimensional ordinary least squares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearRegression {
    line: Option<Line>,
}

/// Fail with `InvalidInput` on empty or length-mismatched training data.
pub(crate) fn check_training_data(x: &[f64], y: &[f64]) -> Result<()> {
    ensure!(
        x.len() == y.len(),
        invalid_input!(
            "the parameters for training do not have the same length: {} vs {}",
            x.len(),
            y.len()
        )
    );
    ensure!(!x.is_empty(), invalid_input!("the training parameters are empty"));
    Ok(())
}

impl LinearRegression {
    /// Create an unfitted model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the line to `(x, y)` pairs.
    ///
    /// Fails with `Numerical` when every `x` is identical, since the slope
    /// is then undefined.
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_training_data(x, y)?;

        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            sum_x += xi;
            sum_y += yi;
            sum_xy += xi * yi;
            sum_xx += xi * xi;
        }

        let n = x.len() as f64;
        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 || !denominator.is_finite() {
            return Err(SnugError::numerical(
                "all x values are identical; the slope is undefined",
            ));
        }

        let line = Line {
            slope: (n * sum_xy - sum_x * sum_y) / denominator,
            intercept: (sum_y * sum_xx - sum_x * sum_xy) / denominator,
        };
        log::info!(
            "{} fitted on {} points: slope {:.6}, intercept {:.6}",
            MODEL_NAME,
            x.len(),
            line.slope,
            line.intercept
        );

        self.line = Some(line);
        Ok(())
    }

    /// Predict `y` for every `x`.
    pub fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        let line = self.fitted()?;
        Ok(x.iter().map(|&xi| line.slope * xi + line.intercept).collect())
    }

    /// Fitted slope `m`.
    pub fn slope(&self) -> Result<f64> {
        Ok(self.fitted()?.slope)
    }

    /// Fitted intercept `b`.
    pub fn intercept(&self) -> Result<f64> {
        Ok(self.fitted()?.intercept)
    }

    /// Whether the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.line.is_some()
    }

    fn fitted(&self) -> Result<Line> {
        self.line.ok_or_else(|| SnugError::not_trained(MODEL_NAME))
    }
}

impl Estimator for LinearRegression {
    type Features = [f64];
    type Targets = [f64];
    type Output = Vec<f64>;

    fn fit(&mut self, features: &[f64], targets: &[f64]) -> Result<()> {
        LinearRegression::fit(self, features, targets)
    }

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        LinearRegression::predict(self, features)
    }

    fn is_fitted(&self) -> bool {
        LinearRegression::is_fitted(self)
    }

    fn name(&self) -> &'static str {
        MODEL_NAME
    }
}

impl Regressor for LinearRegression {}
