//! Core configuration structures for SnugML.
//!
//! Each model reads its own section ([`TreeConfig`], [`PolynomialConfig`],
//! [`NaiveBayesConfig`], [`MlpConfig`]); [`Config`] bundles them so a whole
//! setup can be loaded from one JSON or TOML file.

use crate::core::constants::*;
use crate::core::error::{Result, SnugError};
use crate::core::types::Depth;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Decision tree parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Maximum tree depth; values <= 0 select the default of 5
    pub max_depth: i32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            max_depth: DEFAULT_MAX_DEPTH as i32,
        }
    }
}

impl TreeConfig {
    /// Tree config with the given depth limit.
    pub fn with_max_depth(max_depth: i32) -> Self {
        TreeConfig { max_depth }
    }

    /// The depth limit actually applied during training.
    pub fn effective_max_depth(&self) -> Depth {
        if self.max_depth <= 0 {
            DEFAULT_MAX_DEPTH
        } else {
            self.max_depth as Depth
        }
    }
}

/// Polynomial regression parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolynomialConfig {
    /// Highest power of x in the fitted polynomial
    pub degree: usize,
}

impl Default for PolynomialConfig {
    fn default() -> Self {
        PolynomialConfig {
            degree: DEFAULT_POLYNOMIAL_DEGREE,
        }
    }
}

/// Gaussian Naive Bayes parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Standard deviation used when a feature is constant within a class
    pub min_std: f64,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        NaiveBayesConfig {
            min_std: DEFAULT_MIN_STD,
        }
    }
}

/// Single-hidden-layer perceptron parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MlpConfig {
    /// Number of hidden units
    pub hidden_nodes: usize,
    /// Step size of each gradient update
    pub learning_rate: f64,
    /// Passes over the training data per `fit`
    pub epochs: usize,
    /// Seed for weight initialisation
    pub seed: u64,
}

impl Default for MlpConfig {
    fn default() -> Self {
        MlpConfig {
            hidden_nodes: DEFAULT_HIDDEN_NODES,
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            seed: DEFAULT_RANDOM_SEED,
        }
    }
}

/// Main configuration structure bundling every model section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Decision tree section
    pub tree: TreeConfig,
    /// Polynomial regression section
    pub polynomial: PolynomialConfig,
    /// Gaussian Naive Bayes section
    pub naive_bayes: NaiveBayesConfig,
    /// Perceptron section
    pub mlp: MlpConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.naive_bayes.min_std <= 0.0 || !self.naive_bayes.min_std.is_finite() {
            return Err(SnugError::invalid_parameter(
                "naive_bayes.min_std",
                self.naive_bayes.min_std.to_string(),
                "must be a positive finite number",
            ));
        }

        if self.mlp.hidden_nodes == 0 {
            return Err(SnugError::invalid_parameter(
                "mlp.hidden_nodes",
                self.mlp.hidden_nodes.to_string(),
                "must be at least 1",
            ));
        }

        if self.mlp.learning_rate <= 0.0 || !self.mlp.learning_rate.is_finite() {
            return Err(SnugError::invalid_parameter(
                "mlp.learning_rate",
                self.mlp.learning_rate.to_string(),
                "must be a positive finite number",
            ));
        }

        Ok(())
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let config: Config = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(SnugError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => {
                return Err(SnugError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `SNUGML_*` environment variable overrides
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        env_override("SNUGML_MAX_DEPTH", &mut self.tree.max_depth)?;
        env_override("SNUGML_POLYNOMIAL_DEGREE", &mut self.polynomial.degree)?;
        env_override("SNUGML_MIN_STD", &mut self.naive_bayes.min_std)?;
        env_override("SNUGML_HIDDEN_NODES", &mut self.mlp.hidden_nodes)?;
        env_override("SNUGML_LEARNING_RATE", &mut self.mlp.learning_rate)?;
        env_override("SNUGML_EPOCHS", &mut self.mlp.epochs)?;
        env_override("SNUGML_RANDOM_SEED", &mut self.mlp.seed)?;
        self.validate()
    }
}

fn env_override<T: FromStr>(name: &str, target: &mut T) -> Result<()> {
    if let Ok(value) = std::env::var(name) {
        *target = value
            .parse()
            .map_err(|_| SnugError::config(format!("Invalid {}: {:?}", name, value)))?;
    }
    Ok(())
}

/// Builder for [`Config`] that collects validation errors until `build`.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
    validation_errors: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::default(),
            validation_errors: Vec::new(),
        }
    }

    /// Set the decision tree depth limit (<= 0 selects the default)
    pub fn max_depth(mut self, max_depth: i32) -> Self {
        self.config.tree.max_depth = max_depth;
        self
    }

    /// Set the polynomial degree
    pub fn degree(mut self, degree: usize) -> Self {
        self.config.polynomial.degree = degree;
        self
    }

    /// Set the Naive Bayes standard deviation floor
    pub fn min_std(mut self, min_std: f64) -> Self {
        if min_std <= 0.0 {
            self.validation_errors
                .push("min_std must be positive".to_string());
        }
        self.config.naive_bayes.min_std = min_std;
        self
    }

    /// Set the number of hidden units
    pub fn hidden_nodes(mut self, hidden_nodes: usize) -> Self {
        if hidden_nodes == 0 {
            self.validation_errors
                .push("hidden_nodes must be at least 1".to_string());
        }
        self.config.mlp.hidden_nodes = hidden_nodes;
        self
    }

    /// Set the perceptron learning rate
    pub fn learning_rate(mut self, rate: f64) -> Self {
        if rate <= 0.0 {
            self.validation_errors
                .push("learning_rate must be positive".to_string());
        }
        self.config.mlp.learning_rate = rate;
        self
    }

    /// Set the number of training epochs
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.config.mlp.epochs = epochs;
        self
    }

    /// Set the weight initialisation seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.mlp.seed = seed;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if !self.validation_errors.is_empty() {
            return Err(SnugError::config(format!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            )));
        }

        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
