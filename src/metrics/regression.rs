//! Regression metrics.

use crate::core::error::{Result, SnugError};
use serde::{Deserialize, Serialize};

/// Regression evaluation metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Square Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// R-squared (coefficient of determination)
    pub r2: f64,
}

fn check_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.is_empty() {
        return Err(SnugError::invalid_input("cannot evaluate an empty target vector"));
    }
    if y_true.len() != y_pred.len() {
        return Err(SnugError::invalid_input(format!(
            "targets and predictions have different lengths: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    Ok(())
}

/// Mean squared error between targets and predictions.
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let sse: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    Ok(sse / y_true.len() as f64)
}

/// Coefficient of determination, `1 - SSE / SST`.
///
/// A constant target has no variance to explain; the score is then `1.0`
/// for a perfect fit and `0.0` otherwise.
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_lengths(y_true, y_pred)?;
    let n = y_true.len() as f64;
    let mean = y_true.iter().sum::<f64>() / n;

    let mut sse = 0.0;
    let mut sst = 0.0;
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        sse += (t - p) * (t - p);
        sst += (t - mean) * (t - mean);
    }

    if sst > 0.0 {
        Ok(1.0 - sse / sst)
    } else if sse == 0.0 {
        Ok(1.0)
    } else {
        Ok(0.0)
    }
}

/// Evaluate all regression metrics at once.
pub fn evaluate_regression(y_true: &[f64], y_pred: &[f64]) -> Result<RegressionMetrics> {
    let mse = mean_squared_error(y_true, y_pred)?;
    let mae = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum::<f64>()
        / y_true.len() as f64;

    Ok(RegressionMetrics {
        mse,
        rmse: mse.sqrt(),
        mae,
        r2: r2_score(y_true, y_pred)?,
    })
}
