//! In-memory size cache types
//!
//! A cache maps labels to record sets, and record sets map artifact paths
//! to per-compressor byte counts. All maps keep insertion order: label
//! display order falls back to first-recorded order, so an updated label
//! keeps its original position.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Schema version written by this crate
pub const CACHE_VERSION: f64 = 0.4;

/// Key holding cache metadata in the JSON document
pub const METADATA_KEY: &str = "";

/// Pseudo-label overwritten by every comparison run.
///
/// The leading space keeps it from colliding with a branch or user label.
pub const LAST_RUN: &str = " last run";

/// Compressor name denoting the uncompressed size
pub const RAW: &str = "";

/// Byte counts keyed by compressor name (`""` is uncompressed)
pub type SizeRecord = IndexMap<String, u64>;

/// Size records keyed by artifact path
pub type SizeRecordSet = IndexMap<String, SizeRecord>;

/// Whether a label name is reserved (cannot be a branch or user label)
pub fn is_reserved(label: &str) -> bool {
    label.starts_with(' ')
}

/// Cache metadata stored under the empty-string key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheMeta {
    /// Schema version
    pub version: f64,

    /// Branch tips: label -> commit hash recorded with its sizes
    #[serde(default)]
    pub tips: IndexMap<String, String>,
}

impl Default for CacheMeta {
    fn default() -> Self {
        Self {
            version: CACHE_VERSION,
            tips: IndexMap::new(),
        }
    }
}

/// The persisted size cache
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeCache {
    /// Version and branch tips
    pub meta: CacheMeta,

    /// Record sets keyed by label
    pub entries: IndexMap<String, SizeRecordSet>,
}

impl SizeCache {
    /// Create an empty cache at the current version
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cache holds no labels at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record set of the most recent comparison run
    pub fn last_run(&self) -> Option<&SizeRecordSet> {
        self.entries.get(LAST_RUN)
    }

    /// Commit hash recorded for a branch-tip label
    pub fn tip(&self, label: &str) -> Option<&str> {
        self.meta.tips.get(label).map(String::as_str)
    }

    /// Whether the label is a known branch tip
    pub fn is_tip(&self, label: &str) -> bool {
        self.meta.tips.contains_key(label)
    }

    /// Set a label's record set, keeping its position if it already exists
    pub fn set_entry(&mut self, label: impl Into<String>, sizes: SizeRecordSet) {
        self.entries.insert(label.into(), sizes);
    }

    /// Record `sizes` as the tip of `branch` at commit `head`
    pub fn stamp_tip(&mut self, branch: &str, head: &str, sizes: SizeRecordSet) {
        self.meta.tips.insert(branch.to_string(), head.to_string());
        self.set_entry(branch, sizes);
    }

    /// De-register a branch tip, keeping the label's data.
    ///
    /// Returns true if the label was a tip.
    pub fn untrack_tip(&mut self, label: &str) -> bool {
        self.meta.tips.shift_remove(label).is_some()
    }

    /// Remove a label's data and tip registration.
    ///
    /// Returns true if the label had data.
    pub fn remove_label(&mut self, label: &str) -> bool {
        self.meta.tips.shift_remove(label);
        self.entries.shift_remove(label).is_some()
    }

    /// Give every tip an entry so `tips` never names a missing label
    pub(crate) fn backfill_tip_entries(&mut self) {
        for label in self.meta.tips.keys() {
            if !self.entries.contains_key(label) {
                self.entries.insert(label.clone(), SizeRecordSet::new());
            }
        }
    }
}

impl Serialize for SizeCache {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        map.serialize_entry(METADATA_KEY, &self.meta)?;
        for (label, sizes) in &self.entries {
            map.serialize_entry(label, sizes)?;
        }
        map.end()
    }
}

/// Build a record from `(compressor, size)` pairs
#[cfg(test)]
pub(crate) fn record(pairs: &[(&str, u64)]) -> SizeRecord {
    pairs.iter().map(|(c, n)| (c.to_string(), *n)).collect()
}
