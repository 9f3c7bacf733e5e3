//! Evaluation metrics for SnugML models.
//!
//! ```rust
//! use snugml::metrics::{accuracy_score, evaluate_regression};
//!
//! let acc = accuracy_score(&["a", "b", "a"], &["a", "b", "b"]);
//! assert!((acc - 2.0 / 3.0).abs() < 1e-12);
//!
//! let metrics = evaluate_regression(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(metrics.mse, 0.0);
//! ```

pub mod classification;
pub mod regression;

pub use classification::{accuracy_score, ConfusionCounts};
pub use regression::{evaluate_regression, mean_squared_error, r2_score, RegressionMetrics};
