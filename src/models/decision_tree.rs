//! Decision tree classifier facade.
//!
//! Wraps the tree builder and predictor with input validation, a
//! configurable depth limit and the human-readable views of a trained tree.

use crate::config::TreeConfig;
use crate::core::constants::UNTRAINED_TREE_MESSAGE;
use crate::core::error::{Result, SnugError};
use crate::core::traits::{Classifier, Estimator};
use crate::core::types::Category;
use crate::dataset::Dataset;
use crate::tree::{GainTrace, Tree, TreeBuilder};

const MODEL_NAME: &str = "DecisionTreeClassifier";

/// ID3 decision tree over categorical attributes.
///
/// ```rust
/// use snugml::DecisionTreeClassifier;
///
/// let rows = vec![
///     vec!["sunny".to_string(), "hot".to_string()],
///     vec!["rain".to_string(), "cool".to_string()],
///     vec!["sunny".to_string(), "cool".to_string()],
/// ];
/// let labels = vec!["no".to_string(), "yes".to_string(), "yes".to_string()];
///
/// let mut model = DecisionTreeClassifier::with_max_depth(3);
/// model.fit(&rows, &labels)?;
/// assert_eq!(model.predict(&rows)?, labels);
/// println!("{}", model.explain());
/// # Ok::<(), snugml::SnugError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTreeClassifier<V = String, L = String> {
    config: TreeConfig,
    tree: Option<Tree<V, L>>,
    trace: GainTrace,
}

impl<V: Category, L: Category> DecisionTreeClassifier<V, L> {
    /// Create an untrained classifier.
    pub fn new(config: TreeConfig) -> Self {
        DecisionTreeClassifier {
            config,
            tree: None,
            trace: GainTrace::new(),
        }
    }

    /// Create an untrained classifier with the given depth limit
    /// (<= 0 selects the default).
    pub fn with_max_depth(max_depth: i32) -> Self {
        Self::new(TreeConfig::with_max_depth(max_depth))
    }

    /// Get the configuration
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Train on `rows` and `labels`, replacing any previous tree and gain
    /// trace.
    ///
    /// Fails with `InvalidInput` if either input is empty, their lengths
    /// differ, or the rows do not all have the same width. A failed call
    /// leaves the previous model untouched.
    pub fn fit(&mut self, rows: &[Vec<V>], labels: &[L]) -> Result<()> {
        self.fit_with_config(self.config, rows, labels)
    }

    /// Train with the given depth limit, which becomes the stored config on
    /// success. A failed call keeps both the previous tree and config.
    pub fn fit_with_depth(&mut self, rows: &[Vec<V>], labels: &[L], max_depth: i32) -> Result<()> {
        self.fit_with_config(TreeConfig::with_max_depth(max_depth), rows, labels)
    }

    fn fit_with_config(&mut self, config: TreeConfig, rows: &[Vec<V>], labels: &[L]) -> Result<()> {
        let data = Dataset::new(rows, labels)?;
        let builder = TreeBuilder::new(&config);
        let (tree, trace) = builder.build(&data)?;

        log::info!(
            "{} trained on {} rows: {} leaves, depth {} (limit {})",
            MODEL_NAME,
            data.num_rows(),
            tree.num_leaves(),
            tree.depth(),
            builder.max_depth()
        );

        self.config = config;
        self.tree = Some(tree);
        self.trace = trace;
        Ok(())
    }

    /// Predict one label per row, in order.
    pub fn predict(&self, rows: &[Vec<V>]) -> Result<Vec<L>> {
        self.trained_tree()?.predict(rows)
    }

    /// Predict the label of a single row.
    pub fn predict_one(&self, row: &[V]) -> Result<L> {
        self.trained_tree()?.predict_row(row).cloned()
    }

    /// Indented outline of the trained tree, or a notice if untrained.
    pub fn explain(&self) -> String {
        match &self.tree {
            Some(tree) => tree.render(),
            None => UNTRAINED_TREE_MESSAGE.to_string(),
        }
    }

    /// Gain log of the last `fit`: the gain of every evaluated column and
    /// the best column, per split decision.
    pub fn diagnostics(&self) -> String {
        self.trace.to_string()
    }

    /// Structured gain trace of the last `fit`.
    pub fn gain_trace(&self) -> &GainTrace {
        &self.trace
    }

    /// The trained tree, if any.
    pub fn tree(&self) -> Option<&Tree<V, L>> {
        self.tree.as_ref()
    }

    /// Depth of the trained tree.
    pub fn depth(&self) -> Result<usize> {
        Ok(self.trained_tree()?.depth())
    }

    /// Number of leaves of the trained tree.
    pub fn num_leaves(&self) -> Result<usize> {
        Ok(self.trained_tree()?.num_leaves())
    }

    /// Whether a tree has been trained.
    pub fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }

    fn trained_tree(&self) -> Result<&Tree<V, L>> {
        self.tree
            .as_ref()
            .ok_or_else(|| SnugError::not_trained(MODEL_NAME))
    }
}

impl<V: Category, L: Category> Default for DecisionTreeClassifier<V, L> {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}

impl<V: Category, L: Category> Estimator for DecisionTreeClassifier<V, L> {
    type Features = [Vec<V>];
    type Targets = [L];
    type Output = Vec<L>;

    fn fit(&mut self, features: &[Vec<V>], targets: &[L]) -> Result<()> {
        DecisionTreeClassifier::fit(self, features, targets)
    }

    fn predict(&self, features: &[Vec<V>]) -> Result<Vec<L>> {
        DecisionTreeClassifier::predict(self, features)
    }

    fn is_fitted(&self) -> bool {
        DecisionTreeClassifier::is_fitted(self)
    }

    fn name(&self) -> &'static str {
        MODEL_NAME
    }
}

impl<V: Category, L: Category> Classifier<L> for DecisionTreeClassifier<V, L> {}
