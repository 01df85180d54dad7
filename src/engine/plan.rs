//! Results of engine operations, ready for rendering

use super::delta::Delta;
use serde::Serialize;

/// Fresh sizes of one artifact, raw first then one per compressor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRow {
    pub path: String,
    pub sizes: Vec<u64>,
}

/// Deltas of one artifact against a label, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaRow {
    pub path: String,
    pub deltas: Vec<Delta>,
}

/// Comparison of the fresh sizes against one stored label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBlock {
    pub label: String,
    /// Commit hash when the label is a branch tip
    pub tip: Option<String>,
    pub rows: Vec<DeltaRow>,
}

/// Everything a comparison run displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Compressor columns after the raw column
    pub compressors: Vec<String>,
    /// The fresh measurement
    pub sizes: Vec<SizeRow>,
    /// One block per stored label, in display order
    pub blocks: Vec<LabelBlock>,
    /// Branch the fresh sizes were recorded under, if any
    pub saved_as: Option<String>,
}

impl Comparison {
    /// Block for `label`, if it was compared
    pub fn block(&self, label: &str) -> Option<&LabelBlock> {
        self.blocks.iter().find(|b| b.label == label)
    }
}

/// A stored label as shown by `list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedLabel {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// Outcome of copying the last run into a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    pub label: String,
    /// The label was a branch tip and no longer is
    pub removed_tip: bool,
}

/// Outcome of a prune
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pruned {
    /// The whole cache file was deleted
    Emptied,
    /// These labels were removed
    Removed(Vec<String>),
}
