//! Size comparison and cache reconciliation
//!
//! A comparison run measures the configured artifacts, compares them with
//! every stored label, then records the run:
//!
//! 1. load and upgrade the cache
//! 2. measure fresh sizes
//! 3. order labels from the cache as loaded, so the previous last run is
//!    compared rather than the new one
//! 4. build one delta block per label
//! 5. ask the VCS for the branch tip (failure only loses branch info)
//! 6. overwrite the last run
//! 7. on a clean tree, save the sizes under the branch name when that
//!    branch is already a tracked tip or has no label yet
//! 8. write the cache back
//!
//! Step 7 never adopts a hand-made label that happens to share a branch
//! name.

mod delta;
mod labels;
mod plan;

pub use delta::Delta;
pub use labels::{add, empty, list, prune, remove};
pub use plan::{Added, Comparison, DeltaRow, LabelBlock, ListedLabel, Pruned, SizeRow};

use crate::cache::{ordered_labels, SizeCache, SizeRecordSet, LAST_RUN, RAW};
use crate::config::schema::CompareConfig;
use crate::error::SizeResult;
use crate::measure::{measure, CompressorSet, FileReader, FsReader};
use crate::vcs::{GitStatus, VcsStatus, VcsStatusProvider};
use std::path::Path;
use tracing::{debug, info, warn};

/// Runs size comparisons with injected I/O collaborators
pub struct ReconciliationEngine {
    reader: Box<dyn FileReader>,
    compressors: CompressorSet,
    vcs: Box<dyn VcsStatusProvider>,
}

impl ReconciliationEngine {
    /// Create an engine from its collaborators
    pub fn new(
        reader: Box<dyn FileReader>,
        compressors: CompressorSet,
        vcs: Box<dyn VcsStatusProvider>,
    ) -> Self {
        Self {
            reader,
            compressors,
            vcs,
        }
    }

    /// Create an engine reading the filesystem and asking git
    pub fn from_config(config: &CompareConfig) -> SizeResult<Self> {
        let compressors = CompressorSet::from_names(&config.compressors)?;
        debug!("Using compressors {:?}", compressors);
        Ok(Self::new(
            Box::new(FsReader),
            compressors,
            Box::new(GitStatus::new()),
        ))
    }

    /// Column keys: raw first, then each compressor
    fn columns(&self) -> Vec<String> {
        std::iter::once(RAW.to_string())
            .chain(self.compressors.names())
            .collect()
    }

    /// Measure `artifacts`, compare them with the cache at `cache_path` and
    /// record the run
    pub async fn compare<S: AsRef<str>>(
        &self,
        cache_path: &Path,
        artifacts: &[S],
    ) -> SizeResult<Comparison> {
        let mut cache = SizeCache::load(cache_path).await;
        let fresh = measure(self.reader.as_ref(), artifacts, &self.compressors);
        let columns = self.columns();

        let sizes: Vec<SizeRow> = fresh
            .iter()
            .map(|(path, record)| SizeRow {
                path: path.clone(),
                sizes: columns
                    .iter()
                    .map(|c| record.get(c).copied().unwrap_or_default())
                    .collect(),
            })
            .collect();

        let blocks: Vec<LabelBlock> = ordered_labels(&cache)
            .into_iter()
            .map(|label| compare_label(&cache, label, &fresh, &columns))
            .collect();

        let status = match self.vcs.status().await {
            Ok(status) => Some(status),
            Err(e) => {
                warn!("Unable to determine branch tip: {}", e);
                None
            }
        };

        cache.set_entry(LAST_RUN, fresh.clone());

        let mut saved_as = None;
        if let Some(status) = status.filter(|s| should_stamp(&cache, s)) {
            info!("Recording sizes for {} @ {}", status.branch, status.head);
            cache.stamp_tip(&status.branch, &status.head, fresh);
            saved_as = Some(status.branch);
        }

        cache.save(cache_path).await?;

        Ok(Comparison {
            compressors: self.compressors.names(),
            sizes,
            blocks,
            saved_as,
        })
    }
}

/// Whether a run on `status` should record its sizes under the branch name
fn should_stamp(cache: &SizeCache, status: &VcsStatus) -> bool {
    if status.changed {
        debug!("Working tree of {} has changes, not recording", status.branch);
        return false;
    }

    let tracked = cache.is_tip(&status.branch);
    let unclaimed = !cache.entries.contains_key(&status.branch);
    if !tracked && !unclaimed {
        debug!(
            "Label {} exists but is not a tracked branch tip, not recording",
            status.branch
        );
    }
    tracked || unclaimed
}

/// Deltas of `fresh` against the stored sizes of `label`
fn compare_label(
    cache: &SizeCache,
    label: &str,
    fresh: &SizeRecordSet,
    columns: &[String],
) -> LabelBlock {
    let stored = cache.entries.get(label);

    let rows = fresh
        .iter()
        .map(|(path, record)| {
            let baseline = stored.and_then(|sizes| sizes.get(path));
            DeltaRow {
                path: path.clone(),
                deltas: columns
                    .iter()
                    .map(|c| match record.get(c) {
                        Some(&size) => {
                            Delta::between(size, baseline.and_then(|b| b.get(c)).copied())
                        }
                        None => Delta::NoBaseline,
                    })
                    .collect(),
            }
        })
        .collect();

    LabelBlock {
        label: label.to_string(),
        tip: cache.tip(label).map(str::to_string),
        rows,
    }
}
