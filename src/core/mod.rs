//! Core infrastructure module for SnugML.
//!
//! This module provides the foundational components shared by every model:
//!
//! - [`types`]: the [`Category`](types::Category) bound and index aliases
//! - [`constants`]: default configuration values
//! - [`error`]: the crate error type and helpers
//! - [`traits`]: the fit/predict contract
//!
//! # Usage
//!
//! ```rust
//! use snugml::core::{
//!     constants::DEFAULT_MAX_DEPTH,
//!     error::{Result, SnugError},
//! };
//!
//! fn depth_or_default(requested: i32) -> usize {
//!     if requested <= 0 { DEFAULT_MAX_DEPTH } else { requested as usize }
//! }
//! assert_eq!(depth_or_default(0), 5);
//! # let _: Result<()> = Err(SnugError::invalid_input("example"));
//! ```

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{Result, SnugError};
pub use traits::*;
pub use types::*;

use std::sync::Once;

static LOGGING_INIT: Once = Once::new();

/// Initialize the logging subsystem.
///
/// Defaults `RUST_LOG` to `info` when it is unset, then installs
/// `env_logger`. Safe to call repeatedly; an already installed logger is
/// left in place.
pub fn initialize_core() -> Result<()> {
    LOGGING_INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or("info");
        if env_logger::Builder::from_env(env).try_init().is_ok() {
            log::debug!("SnugML {} logging initialized", SNUGML_VERSION);
        }
    });
    Ok(())
}

/// Check if [`initialize_core`] has run.
pub fn is_core_initialized() -> bool {
    LOGGING_INIT.is_completed()
}
