//! Configuration management for SnugML.
//!
//! Model parameters live in plain `serde` structs so they can be built in
//! code with [`ConfigBuilder`], loaded from JSON or TOML files, or adjusted
//! through `SNUGML_*` environment variables.

pub mod core;

pub use self::core::{Config, ConfigBuilder, MlpConfig, NaiveBayesConfig, PolynomialConfig, TreeConfig};

/// Conventional file name for a SnugML configuration file
pub const DEFAULT_CONFIG_FILE: &str = "snugml.toml";
