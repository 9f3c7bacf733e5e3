//! Data preprocessing utilities for SnugML.

pub mod encoder;

pub use encoder::LabelEncoder;
