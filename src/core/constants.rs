//! System constants and default configuration values for SnugML.

use crate::core::types::Depth;

/// Default maximum tree depth, used whenever a caller asks for a depth <= 0.
pub const DEFAULT_MAX_DEPTH: Depth = 5;

/// Default polynomial degree for polynomial regression.
pub const DEFAULT_POLYNOMIAL_DEGREE: usize = 2;

/// Standard deviation substituted for features with zero spread within a
/// class in Gaussian Naive Bayes.
pub const DEFAULT_MIN_STD: f64 = 1e-10;

/// Default number of hidden units of the perceptron.
pub const DEFAULT_HIDDEN_NODES: usize = 8;

/// Default learning rate of the perceptron.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Default number of passes over the training data for the perceptron.
pub const DEFAULT_EPOCHS: usize = 1000;

/// Default random seed for weight initialisation.
pub const DEFAULT_RANDOM_SEED: u64 = 42;

/// Batches with at least this many rows are predicted in parallel.
pub const PARALLEL_PREDICTION_THRESHOLD: usize = 1024;

/// Pivots with absolute value below this are treated as zero when solving
/// the normal equations.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// Library version string
pub const SNUGML_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message returned by `explain` on an untrained decision tree.
pub const UNTRAINED_TREE_MESSAGE: &str = "No tree trained yet";
