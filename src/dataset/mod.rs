//! Dataset management module for SnugML.
//!
//! Training tables are plain slices owned by the caller; this module
//! validates them and provides the label encoder used to move between
//! string labels and dense class indices.

pub mod dataset;
pub mod preprocessing;

pub use dataset::{check_row_widths, Dataset};
pub use preprocessing::LabelEncoder;
