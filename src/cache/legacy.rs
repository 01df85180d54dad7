//! Historical cache formats
//!
//! These describe documents written by older releases and must not change
//! as the current schema evolves. Each converts into the current in-memory
//! [`SizeCache`].
//!
//! | Format | Metadata | Records |
//! |--------|----------|---------|
//! | Flat | none | `path -> int`, plus `"<path>.gz" -> int` |
//! | Labeled (<= 0.3) | `""` without a version | bare ints or keyed maps, `"<path>.gz"` for the last file |
//! | Current (0.4) | `"": {version, tips}` | `path -> {compressor -> int}` |

use super::model::{CacheMeta, SizeCache, SizeRecord, SizeRecordSet, LAST_RUN, RAW};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;

/// The only compressor legacy formats stored, as a key suffix
const LEGACY_GZ_SUFFIX: &str = ".gz";

/// Compressor name legacy gzip sizes migrate to
const LEGACY_GZ: &str = "gz";

/// A record as found in a legacy document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum LegacyRecord {
    /// Uncompressed size only
    Bare(u64),
    /// Already keyed by compressor
    Keyed(SizeRecord),
}

/// Metadata of a labeled document; any version it carries is falsy
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LabeledMeta {
    #[serde(default)]
    tips: Option<IndexMap<String, String>>,
}

/// Labeled (<= 0.3) document
#[derive(Debug, Deserialize)]
pub(crate) struct LabeledFormat {
    #[serde(rename = "")]
    meta: Option<LabeledMeta>,

    #[serde(flatten)]
    labels: IndexMap<String, Option<IndexMap<String, LegacyRecord>>>,
}

/// Flat document: a single unlabeled record set
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct FlatFormat(IndexMap<String, LegacyRecord>);

impl From<FlatFormat> for LabeledFormat {
    fn from(flat: FlatFormat) -> Self {
        let mut labels = IndexMap::new();
        labels.insert(LAST_RUN.to_string(), Some(flat.0));
        Self {
            meta: Some(LabeledMeta::default()),
            labels,
        }
    }
}

impl From<LabeledFormat> for SizeCache {
    fn from(doc: LabeledFormat) -> Self {
        let tips = doc
            .meta
            .and_then(|meta| meta.tips)
            .unwrap_or_default();

        let entries = doc
            .labels
            .into_iter()
            .map(|(label, sizes)| (label, sizes.map(upgrade_set).unwrap_or_default()))
            .collect();

        SizeCache {
            meta: CacheMeta {
                tips,
                ..CacheMeta::default()
            },
            entries,
        }
    }
}

/// Convert a legacy record set to canonical records.
///
/// A bare `"<path>.gz"` value is the gzip size of `<path>` only when
/// `<path>` is itself in the set; otherwise it is an artifact of its own.
fn upgrade_set(set: IndexMap<String, LegacyRecord>) -> SizeRecordSet {
    let paths: HashSet<&str> = set.keys().map(String::as_str).collect();
    let mut compressed = Vec::new();
    let mut out = SizeRecordSet::new();

    for (key, record) in &set {
        match record {
            LegacyRecord::Keyed(record) => {
                out.insert(key.clone(), record.clone());
            }
            LegacyRecord::Bare(size) => match key.strip_suffix(LEGACY_GZ_SUFFIX) {
                Some(path) if paths.contains(path) => compressed.push((path, *size)),
                _ => {
                    let mut record = SizeRecord::new();
                    record.insert(RAW.to_string(), *size);
                    out.insert(key.clone(), record);
                }
            },
        }
    }

    for (path, size) in compressed {
        if let Some(record) = out.get_mut(path) {
            record.entry(LEGACY_GZ.to_string()).or_insert(size);
        }
    }

    out
}
