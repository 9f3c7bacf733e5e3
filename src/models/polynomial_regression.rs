//! Polynomial regression of a single input, fitted through the normal
//! equations.

use crate::config::PolynomialConfig;
use crate::core::constants::SINGULARITY_EPSILON;
use crate::core::error::{Result, SnugError};
use crate::core::traits::{Estimator, Regressor};
use crate::models::linear_regression::check_training_data;
use ndarray::{Array1, Array2};

const MODEL_NAME: &str = "PolynomialRegression";

/// Least-squares polynomial `y = c0 + c1·x + ... + cd·x^d`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialRegression {
    degree: usize,
    coefficients: Option<Array1<f64>>,
}

impl PolynomialRegression {
    /// Unfitted model of the given degree.
    pub fn new(degree: usize) -> Self {
        PolynomialRegression {
            degree,
            coefficients: None,
        }
    }

    /// Unfitted model with the configured degree.
    pub fn from_config(config: &PolynomialConfig) -> Self {
        Self::new(config.degree)
    }

    /// Degree of the fitted polynomial.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Fit the coefficients to `(x, y)` pairs.
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_training_data(x, y)?;

        let design = self.design_matrix(x);
        let targets = Array1::from(y.to_vec());
        let gram = design.t().dot(&design);
        let moments = design.t().dot(&targets);
        let coefficients = solve(gram, moments)?;

        log::info!(
            "{} of degree {} fitted on {} points: {:?}",
            MODEL_NAME,
            self.degree,
            x.len(),
            coefficients.to_vec()
        );
        self.coefficients = Some(coefficients);
        Ok(())
    }

    /// Evaluate the fitted polynomial at every `x`.
    pub fn predict(&self, x: &[f64]) -> Result<Vec<f64>> {
        let coefficients = self.fitted()?;
        Ok(x.iter().map(|&xi| horner(coefficients, xi)).collect())
    }

    /// Fitted coefficients, lowest power first.
    pub fn coefficients(&self) -> Result<Vec<f64>> {
        Ok(self.fitted()?.to_vec())
    }

    /// Whether the model has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    fn fitted(&self) -> Result<&Array1<f64>> {
        self.coefficients
            .as_ref()
            .ok_or_else(|| SnugError::not_trained(MODEL_NAME))
    }

    /// `X[i][j] = x_i^j` for `j` in `0..=degree`.
    fn design_matrix(&self, x: &[f64]) -> Array2<f64> {
        Array2::from_shape_fn((x.len(), self.degree + 1), |(i, j)| x[i].powi(j as i32))
    }
}

impl Default for PolynomialRegression {
    fn default() -> Self {
        Self::from_config(&PolynomialConfig::default())
    }
}

fn horner(coefficients: &Array1<f64>, x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Solve `a · c = b` by Gaussian elimination with partial pivoting.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot, col]].abs() < SINGULARITY_EPSILON {
            return Err(SnugError::numerical(format!(
                "normal equations are singular at column {}; need more distinct x values",
                col
            )));
        }
        if pivot != col {
            for k in 0..n {
                a.swap([pivot, k], [col, k]);
            }
            b.swap(pivot, col);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut solution = Array1::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * solution[k]).sum();
        solution[row] = (b[row] - tail) / a[[row, row]];
    }
    Ok(solution)
}

impl Estimator for PolynomialRegression {
    type Features = [f64];
    type Targets = [f64];
    type Output = Vec<f64>;

    fn fit(&mut self, features: &[f64], targets: &[f64]) -> Result<()> {
        PolynomialRegression::fit(self, features, targets)
    }

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        PolynomialRegression::predict(self, features)
    }

    fn is_fitted(&self) -> bool {
        PolynomialRegression::is_fitted(self)
    }

    fn name(&self) -> &'static str {
        MODEL_NAME
    }
}

impl Regressor for PolynomialRegression {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_recovers_quadratic() {
        let x: Vec<f64> = (-3..=3).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v * v - 3.0 * v + 1.0).collect();

        let mut model = PolynomialRegression::new(2);
        model.fit(&x, &y).unwrap();

        let c = model.coefficients().unwrap();
        assert_eq!(c.len(), 3);
        assert_relative_eq!(c[0], 1.0, epsilon = 1e-8);
        assert_relative_eq!(c[1], -3.0, epsilon = 1e-8);
        assert_relative_eq!(c[2], 2.0, epsilon = 1e-8);
        assert_relative_eq!(model.predict(&[4.0]).unwrap()[0], 21.0, epsilon = 1e-6);
        assert_relative_eq!(model.evaluate(&x, &y).unwrap().r2, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degree_one_matches_line() {
        let mut model = PolynomialRegression::new(1);
        model.fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
        let c = model.coefficients().unwrap();
        assert_relative_eq!(c[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(c[1], 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_too_few_distinct_points_is_singular() {
        let mut model = PolynomialRegression::new(2);
        assert!(matches!(
            model.fit(&[1.0, 1.0, 2.0], &[1.0, 1.0, 2.0]),
            Err(SnugError::Numerical { .. })
        ));
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_solve_needs_pivoting() {
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let b = array![2.0, 3.0];
        let x = solve(a, b).unwrap();
        assert_relative_eq!(x[0], 3.0);
        assert_relative_eq!(x[1], 2.0);
    }

    #[test]
    fn test_default_degree_and_untrained() {
        let model = PolynomialRegression::default();
        assert_eq!(model.degree(), 2);
        assert!(matches!(
            model.predict(&[1.0]),
            Err(SnugError::ModelNotTrained { .. })
        ));
        assert!(model.coefficients().is_err());
    }
}
