//! Gain trace recorded while a decision tree is grown.
//!
//! The trace is produced by the builder as an ordinary return value and is
//! used only for explainability; it never influences how the tree is built.

use crate::core::types::{Depth, FeatureIndex};
use std::fmt;

/// Gains evaluated for one split decision.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRecord {
    depth: Depth,
    num_rows: usize,
    gains: Vec<f64>,
    candidate: Option<(FeatureIndex, f64)>,
}

impl SplitRecord {
    pub(crate) fn new(depth: Depth, num_rows: usize) -> Self {
        SplitRecord {
            depth,
            num_rows,
            gains: Vec::new(),
            candidate: None,
        }
    }

    /// Record the gain of the next column; only a strictly greater gain
    /// replaces the current candidate.
    pub(crate) fn push_gain(&mut self, gain: f64) {
        let feature = self.gains.len();
        self.gains.push(gain);
        if self.candidate.map_or(true, |(_, best)| gain > best) {
            self.candidate = Some((feature, gain));
        }
    }

    /// Depth of the node this decision was made for.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Number of rows reaching the node.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Gain of every remaining column, indexed by relative column.
    pub fn gains(&self) -> &[f64] {
        &self.gains
    }

    /// Column with the highest gain, whether or not it is informative.
    pub fn candidate(&self) -> Option<FeatureIndex> {
        self.candidate.map(|(feature, _)| feature)
    }

    /// Highest gain seen, if any column was evaluated.
    pub fn best_gain(&self) -> Option<f64> {
        self.candidate.map(|(_, gain)| gain)
    }

    /// Column to split on, or `None` if no column has a positive gain.
    pub fn chosen(&self) -> Option<FeatureIndex> {
        match self.candidate {
            Some((feature, gain)) if gain > 0.0 => Some(feature),
            _ => None,
        }
    }
}

impl fmt::Display for SplitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (feature, gain) in self.gains.iter().enumerate() {
            writeln!(f, "Gain of column {}: {:.6}", feature, gain)?;
        }
        match self.candidate() {
            Some(feature) => writeln!(f, "** Best feature: {}", feature),
            None => writeln!(f, "** Best feature: none"),
        }
    }
}

/// Append-only log of every split decision made while growing one tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GainTrace {
    records: Vec<SplitRecord>,
}

impl GainTrace {
    /// Empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: SplitRecord) {
        self.records.push(record);
    }

    /// Records in the order the decisions were made (depth first).
    pub fn records(&self) -> &[SplitRecord] {
        &self.records
    }

    /// Number of split decisions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no split decision was made.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for GainTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
