//! Core data types for SnugML.
//!
//! Categorical attribute values and class labels share a single bound,
//! [`Category`], so the decision tree, the label encoder and the Naive Bayes
//! classifier accept strings and small integers alike.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Column index into a row of attribute values.
pub type FeatureIndex = usize;

/// Dense index assigned to a class by a label encoder.
pub type ClassIndex = usize;

/// Depth of a node in a decision tree (the root is at depth 0).
pub type Depth = usize;

/// A categorical token: an attribute value or a class label.
///
/// `Ord` gives the deterministic tie-break for majority votes and the
/// ordering of split branches. `Send + Sync` lets trained trees be shared
/// read-only between threads.
pub trait Category: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync {}

impl<T> Category for T where T: Clone + Eq + Hash + Ord + Debug + Display + Send + Sync {}
