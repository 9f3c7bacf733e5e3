//! Estimators.
//!
//! Every model implements [`Estimator`](crate::core::traits::Estimator);
//! regressors and label classifiers additionally implement
//! [`Regressor`](crate::core::traits::Regressor) or
//! [`Classifier`](crate::core::traits::Classifier).

pub mod decision_tree;
pub mod linear_regression;
pub mod naive_bayes;
pub mod neural_network;
pub mod polynomial_regression;

pub use decision_tree::DecisionTreeClassifier;
pub use linear_regression::LinearRegression;
pub use naive_bayes::{FeatureStat, GaussianNB};
pub use neural_network::MlpClassifier;
pub use polynomial_regression::PolynomialRegression;
