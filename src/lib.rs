//! # SnugML
//!
//! A small classical machine-learning library built around an ID3 decision
//! tree for categorical data, with a handful of companion estimators that
//! share the same fit/predict contract.
//!
//! ## Features
//!
//! - **Decision trees**: entropy-based ID3 induction over arbitrary
//!   categorical values, a depth limit, a majority fallback for values never
//!   seen during training, and human-readable explanations of the tree and
//!   of every split decision.
//! - **Regression**: simple linear regression and polynomial regression
//!   through the normal equations.
//! - **Probabilistic and neural classifiers**: Gaussian Naive Bayes and a
//!   one-hidden-layer perceptron.
//! - **Utilities**: a label encoder, accuracy and regression metrics, and a
//!   serde-backed configuration layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use snugml::{accuracy_score, DecisionTreeClassifier};
//!
//! # fn main() -> snugml::Result<()> {
//! let rows: Vec<Vec<String>> = [["sunny", "hot"], ["rain", "cool"], ["sunny", "cool"]]
//!     .iter()
//!     .map(|row| row.iter().map(|v| v.to_string()).collect())
//!     .collect();
//! let labels: Vec<String> = ["no", "yes", "yes"].iter().map(|v| v.to_string()).collect();
//!
//! let mut model = DecisionTreeClassifier::with_max_depth(3);
//! model.fit(&rows, &labels)?;
//!
//! let predictions = model.predict(&rows)?;
//! assert_eq!(accuracy_score(&labels, &predictions), 1.0);
//!
//! println!("{}", model.explain());
//! println!("{}", model.diagnostics());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: error type, constants, the [`Category`] bound and the
//!   [`Estimator`] family of traits
//! - [`config`]: per-model parameters, loadable from JSON or TOML
//! - [`dataset`]: validated training views and the [`LabelEncoder`]
//! - [`tree`]: the decision tree engine (criterion, builder, predictor)
//! - [`models`]: the user-facing estimators
//! - [`metrics`]: accuracy and regression metrics

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Dataset management module
pub mod dataset;

// Decision tree engine
pub mod tree;

// Estimators
pub mod models;

// Evaluation metrics
pub mod metrics;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::*,
    error::{Result, SnugError},
    traits::*,
    types::*,
};

// Re-export configuration functionality
pub use crate::config::{Config, ConfigBuilder, MlpConfig, NaiveBayesConfig, PolynomialConfig, TreeConfig};

// Re-export dataset functionality
pub use crate::dataset::{Dataset, LabelEncoder};

// Re-export the tree engine
pub use crate::tree::{entropy, information_gain, GainTrace, Node, SplitRecord, Tree, TreeBuilder};

// Re-export models
pub use crate::models::{
    DecisionTreeClassifier, GaussianNB, LinearRegression, MlpClassifier, PolynomialRegression,
};

// Re-export metrics
pub use crate::metrics::{accuracy_score, evaluate_regression, RegressionMetrics};

// Version information
pub use crate::core::constants::SNUGML_VERSION as VERSION;

/// Initialize the SnugML library.
///
/// Installs the `env_logger` backend for the `log` messages emitted during
/// training. Optional; models work without it, they just log nowhere.
///
/// # Examples
///
/// ```rust
/// fn main() -> snugml::Result<()> {
///     snugml::init()?;
///     assert!(snugml::is_initialized());
///     Ok(())
/// }
/// ```
pub fn init() -> Result<()> {
    core::initialize_core()
}

/// Check if the library has been initialized.
pub fn is_initialized() -> bool {
    core::is_core_initialized()
}
