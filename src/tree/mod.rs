//! Categorical decision tree engine.
//!
//! The engine is split the way a tree is used:
//!
//! - [`criterion`]: entropy, information gain and split selection
//! - [`builder`]: recursive induction with a depth limit
//! - [`predictor`]: inference with an unseen-value fallback
//! - [`diagnostics`]: the per-split gain trace produced while growing
//! - [`node`] and [`tree`]: the owned tree structure and its rendering
//!
//! Most users go through
//! [`DecisionTreeClassifier`](crate::models::DecisionTreeClassifier); the
//! pieces here are public for inspection and testing.

pub mod builder;
pub mod criterion;
pub mod diagnostics;
pub mod node;
pub mod predictor;
pub mod tree;

pub use builder::TreeBuilder;
pub use criterion::{best_split, entropy, information_gain, majority_label};
pub use diagnostics::{GainTrace, SplitRecord};
pub use node::{Node, SplitNode};
pub use tree::Tree;
