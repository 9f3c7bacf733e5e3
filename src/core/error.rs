//! Error handling and error types for SnugML.
//!
//! Every failure in this crate is a local, synchronous validation failure:
//! there is no I/O on the training or prediction paths, so nothing here is
//! transient or worth retrying. Errors are returned to the caller of
//! `fit`/`predict`/`transform` as soon as they are detected.

use std::fmt::Display;
use std::io;
use thiserror::Error;

/// Main error type for the SnugML library.
#[derive(Error, Debug)]
pub enum SnugError {
    /// Empty, length-mismatched or ragged input data
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// A model (or encoder) was used before `fit` was called
    #[error("Model not trained: {model} must be fitted before use")]
    ModelNotTrained {
        /// Name of the unfitted model
        model: String,
    },

    /// A label outside the fitted alphabet was passed to a label encoder
    #[error("Unknown label: {label:?} is not part of the fitted classes")]
    UnknownLabel {
        /// The rejected label, rendered with `Display`
        label: String,
    },

    /// An index outside the fitted alphabet was passed to a label encoder
    #[error("Unknown index: {index} is not part of the fitted classes")]
    UnknownIndex {
        /// The rejected class index
        index: usize,
    },

    /// Invalid configuration parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        /// Dotted name of the parameter, e.g. `mlp.epochs`
        parameter: String,
        /// The offending value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Numerical computation errors (singular systems, degenerate inputs)
    #[error("Numerical error: {message}")]
    Numerical {
        /// Description of the failure
        message: String,
    },

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the failure
        message: String,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        /// Underlying serde_json error
        #[from]
        source: serde_json::Error,
    },

    /// TOML parsing errors
    #[error("TOML parse error: {source}")]
    TomlDe {
        /// Underlying TOML parse error
        #[from]
        source: toml::de::Error,
    },

    /// TOML serialization errors
    #[error("TOML serialization error: {source}")]
    TomlSer {
        /// Underlying TOML serialization error
        #[from]
        source: toml::ser::Error,
    },
}

/// Type alias for Results using SnugError
pub type Result<T> = std::result::Result<T, SnugError>;

impl SnugError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        SnugError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a not-trained error for the named model
    pub fn not_trained<S: Into<String>>(model: S) -> Self {
        SnugError::ModelNotTrained {
            model: model.into(),
        }
    }

    /// Create an unknown label error
    pub fn unknown_label<T: Display + ?Sized>(label: &T) -> Self {
        SnugError::UnknownLabel {
            label: label.to_string(),
        }
    }

    /// Create an unknown index error
    pub fn unknown_index(index: usize) -> Self {
        SnugError::UnknownIndex { index }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        SnugError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a numerical error
    pub fn numerical<S: Into<String>>(message: S) -> Self {
        SnugError::Numerical {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        SnugError::Config {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Always `false`: retrying with the same input fails the same way.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SnugError::InvalidInput { .. }
            | SnugError::ModelNotTrained { .. }
            | SnugError::UnknownLabel { .. }
            | SnugError::UnknownIndex { .. }
            | SnugError::InvalidParameter { .. }
            | SnugError::Numerical { .. }
            | SnugError::Config { .. }
            | SnugError::IO { .. }
            | SnugError::Json { .. }
            | SnugError::TomlDe { .. }
            | SnugError::TomlSer { .. } => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SnugError::InvalidInput { .. } => "invalid_input",
            SnugError::ModelNotTrained { .. } => "model_not_trained",
            SnugError::UnknownLabel { .. } => "unknown_label",
            SnugError::UnknownIndex { .. } => "unknown_index",
            SnugError::InvalidParameter { .. } => "invalid_parameter",
            SnugError::Numerical { .. } => "numerical",
            SnugError::Config { .. } => "config",
            SnugError::IO { .. } => "io",
            SnugError::Json { .. } => "json",
            SnugError::TomlDe { .. } | SnugError::TomlSer { .. } => "toml",
        }
    }
}

/// Convenience macro for invalid input errors
#[macro_export]
macro_rules! invalid_input {
    ($msg:expr) => {
        $crate::core::error::SnugError::invalid_input($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::SnugError::invalid_input(format!($fmt, $($arg)*))
    };
}

/// Return early with the given error when the condition does not hold
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
