//! Cache file loading, upgrading and saving
//!
//! Loading never fails: a missing, unreadable or unrecognised file is an
//! empty cache. Saving replaces the whole file.

use super::legacy::{FlatFormat, LabeledFormat};
use super::model::{CacheMeta, SizeCache, SizeRecordSet, CACHE_VERSION, METADATA_KEY};
use crate::error::{SizeError, SizeResult};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Current (0.4) document
#[derive(Debug, Deserialize)]
struct CurrentFormat {
    #[serde(rename = "")]
    meta: CurrentMeta,

    #[serde(flatten)]
    entries: IndexMap<String, Option<SizeRecordSet>>,
}

#[derive(Debug, Deserialize)]
struct CurrentMeta {
    #[serde(default)]
    version: Option<f64>,

    #[serde(default)]
    tips: Option<IndexMap<String, String>>,
}

impl CurrentFormat {
    /// A falsy version marks a document that still needs upgrading
    fn is_versioned(&self) -> bool {
        self.meta.version.is_some_and(|v| v != 0.0)
    }
}

impl From<CurrentFormat> for SizeCache {
    fn from(doc: CurrentFormat) -> Self {
        SizeCache {
            meta: CacheMeta {
                version: doc
                    .meta
                    .version
                    .map_or(CACHE_VERSION, |v| v.max(CACHE_VERSION)),
                tips: doc.meta.tips.unwrap_or_default(),
            },
            entries: doc
                .entries
                .into_iter()
                .map(|(label, sizes)| (label, sizes.unwrap_or_default()))
                .collect(),
        }
    }
}

/// Decode a parsed document into the current schema.
///
/// Tries the current format first, then each legacy format in order.
/// Returns `None` when the document matches none of them.
pub fn decode(value: Value) -> Option<SizeCache> {
    let Value::Object(ref object) = value else {
        debug!("Size cache is not a JSON object");
        return None;
    };

    if object.is_empty() {
        return None;
    }

    let mut cache = if object.contains_key(METADATA_KEY) {
        match serde_json::from_value::<CurrentFormat>(value.clone()) {
            Ok(doc) if doc.is_versioned() => SizeCache::from(doc),
            _ => {
                debug!("Upgrading labeled size cache to {}", CACHE_VERSION);
                let doc = serde_json::from_value::<LabeledFormat>(value)
                    .map_err(|e| debug!("Labeled size cache rejected: {}", e))
                    .ok()?;
                SizeCache::from(doc)
            }
        }
    } else {
        debug!("Upgrading flat size cache to {}", CACHE_VERSION);
        let doc = serde_json::from_value::<FlatFormat>(value)
            .map_err(|e| debug!("Flat size cache rejected: {}", e))
            .ok()?;
        SizeCache::from(LabeledFormat::from(doc))
    };

    cache.backfill_tip_entries();
    Some(cache)
}

/// Sibling of `path` that a save is staged in
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl SizeCache {
    /// Load and upgrade the cache at `path`, or an empty cache if there is
    /// nothing usable there
    pub async fn load(path: &Path) -> SizeCache {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No size cache at {}", path.display());
                return SizeCache::new();
            }
            Err(e) => {
                warn!("Ignoring unreadable size cache {}: {}", path.display(), e);
                return SizeCache::new();
            }
        };

        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring malformed size cache {}: {}", path.display(), e);
                return SizeCache::new();
            }
        };

        decode(value).unwrap_or_else(|| {
            warn!("Ignoring unrecognised size cache {}", path.display());
            SizeCache::new()
        })
    }

    /// Write the whole cache to `path`, replacing any previous contents
    pub async fn save(&self, path: &Path) -> SizeResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                SizeError::io(format!("creating cache directory {}", parent.display()), e)
            })?;
        }

        // Staged in a sibling file and renamed over the cache
        let content = serde_json::to_string_pretty(self)?;
        let staging = staging_path(path);
        if let Err(e) = fs::write(&staging, content).await {
            fs::remove_file(&staging).await.ok();
            return Err(SizeError::io(
                format!("writing size cache {}", staging.display()),
                e,
            ));
        }

        fs::rename(&staging, path)
            .await
            .map_err(|e| SizeError::io(format!("replacing size cache {}", path.display()), e))?;

        info!("Size cache saved to {}", path.display());
        Ok(())
    }

    /// Delete the cache file at `path`; a missing file is not an error
    pub async fn delete(path: &Path) -> SizeResult<()> {
        match fs::remove_file(path).await {
            Ok(()) => {
                info!("Size cache {} removed", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SizeError::io(
                format!("deleting size cache {}", path.display()),
                e,
            )),
        }
    }
}
