//! Label maintenance: list, add, remove, prune, empty

use super::plan::{Added, ListedLabel, Pruned};
use crate::cache::{is_reserved, ordered_labels, SizeCache, LAST_RUN};
use crate::error::{SizeError, SizeResult};
use std::path::Path;
use tracing::debug;

/// Stored labels in display order, without the last run
pub async fn list(cache_path: &Path) -> Vec<ListedLabel> {
    let cache = SizeCache::load(cache_path).await;

    ordered_labels(&cache)
        .into_iter()
        .filter(|label| !is_reserved(label))
        .map(|label| ListedLabel {
            label: label.to_string(),
            tip: cache.tip(label).map(str::to_string),
        })
        .collect()
}

/// Copy the last run into each of `labels`.
///
/// A label that was a branch tip stops being tracked as one: it now holds
/// hand-picked data.
pub async fn add<S: AsRef<str>>(cache_path: &Path, labels: &[S]) -> SizeResult<Vec<Added>> {
    for label in labels {
        let label = label.as_ref();
        if label.is_empty() || is_reserved(label) {
            return Err(SizeError::User(format!("Invalid label: {:?}", label)));
        }
    }

    let mut cache = SizeCache::load(cache_path).await;
    let last_run = cache.last_run().cloned().ok_or(SizeError::NoSizeData)?;

    let added: Vec<Added> = labels
        .iter()
        .map(|label| {
            let label = label.as_ref();
            let removed_tip = cache.untrack_tip(label);
            cache.set_entry(label, last_run.clone());
            debug!("Last run saved as {} (was tip: {})", label, removed_tip);
            Added {
                label: label.to_string(),
                removed_tip,
            }
        })
        .collect();

    cache.save(cache_path).await?;
    Ok(added)
}

/// Delete each of `labels`; unknown labels are ignored.
///
/// Returns the labels that had data.
pub async fn remove<S: AsRef<str>>(cache_path: &Path, labels: &[S]) -> SizeResult<Vec<String>> {
    let mut cache = SizeCache::load(cache_path).await;

    let removed: Vec<String> = labels
        .iter()
        .map(|label| label.as_ref())
        .filter(|label| cache.remove_label(label))
        .map(str::to_string)
        .collect();

    if removed.is_empty() {
        debug!("Nothing to remove from {}", cache_path.display());
        return Ok(removed);
    }

    cache.save(cache_path).await?;
    Ok(removed)
}

/// Delete every label except `keep` and the last run; with nothing to keep,
/// delete the cache file
pub async fn prune<S: AsRef<str>>(cache_path: &Path, keep: &[S]) -> SizeResult<Pruned> {
    if keep.is_empty() {
        empty(cache_path).await?;
        return Ok(Pruned::Emptied);
    }

    let mut cache = SizeCache::load(cache_path).await;
    let doomed: Vec<String> = cache
        .entries
        .keys()
        .filter(|label| label.as_str() != LAST_RUN)
        .filter(|label| !keep.iter().any(|k| k.as_ref() == label.as_str()))
        .cloned()
        .collect();

    for label in &doomed {
        cache.remove_label(label);
    }

    if !doomed.is_empty() {
        cache.save(cache_path).await?;
    }
    Ok(Pruned::Removed(doomed))
}

/// Delete the cache file
pub async fn empty(cache_path: &Path) -> SizeResult<()> {
    SizeCache::delete(cache_path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::model::record;
    use crate::cache::{SizeRecordSet, RAW};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sizes(raw: u64) -> SizeRecordSet {
        let mut set = SizeRecordSet::new();
        set.insert("x".to_string(), record(&[(RAW, raw), ("gz", raw / 2)]));
        set
    }

    /// last run, `removed` (tip), `branch` (tip), `label`
    async fn populated(dir: &TempDir) -> PathBuf {
        let path = dir.path().join(".sizecache.json");
        let mut cache = SizeCache::new();
        cache.set_entry(LAST_RUN, sizes(100));
        cache.stamp_tip("removed", "tip", sizes(90));
        cache.stamp_tip("branch", "tip", sizes(80));
        cache.set_entry("label", sizes(70));
        cache.save(&path).await.unwrap();
        path
    }

    #[tokio::test]
    async fn list_skips_last_run() {
        let dir = TempDir::new().unwrap();
        let path = populated(&dir).await;
        let before = std::fs::read_to_string(&path).unwrap();

        let labels = list(&path).await;
        assert_eq!(
            labels,
            vec![
                ListedLabel {
                    label: "removed".to_string(),
                    tip: Some("tip".to_string())
                },
                ListedLabel {
                    label: "branch".to_string(),
                    tip: Some("tip".to_string())
                },
                ListedLabel {
                    label: "label".to_string(),
                    tip: None
                },
            ]
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn add_copies_last_run_and_untracks_tips() {
        let dir = TempDir::new().unwrap();
        let path = populated(&dir).await;

        let added = add(&path, &["custom", "removed"]).await.unwrap();
        assert_eq!(
            added,
            vec![
                Added {
                    label: "custom".to_string(),
                    removed_tip: false
                },
                Added {
                    label: "removed".to_string(),
                    removed_tip: true
                },
            ]
        );

        let cache = SizeCache::load(&path).await;
        assert_eq!(cache.entries["custom"], sizes(100));
        assert_eq!(cache.entries["removed"], sizes(100));
        assert!(!cache.is_tip("removed"));
        assert_eq!(cache.tip("branch"), Some("tip"));
        assert_eq!(cache.last_run(), Some(&sizes(100)));

        let labels: Vec<_> = cache.entries.keys().cloned().collect();
        assert_eq!(labels, vec![LAST_RUN, "removed", "branch", "label", "custom"]);
    }

    #[tokio::test]
    async fn add_without_last_run_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".sizecache.json");

        let err = add(&path, &["custom"]).await.unwrap_err();
        assert!(matches!(err, SizeError::NoSizeData));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn add_rejects_reserved_labels() {
        let dir = TempDir::new().unwrap();
        let path = populated(&dir).await;

        assert!(add(&path, &[LAST_RUN]).await.is_err());
        assert!(add(&path, &[""]).await.is_err());
    }

    #[tokio::test]
    async fn remove_drops_data_and_tip() {
        let dir = TempDir::new().unwrap();
        let path = populated(&dir).await;

        let removed = remove(&path, &["removed", "missing"]).await.unwrap();
        assert_eq!(removed, vec!["removed"]);

        let cache = SizeCache::load(&path).await;
        assert!(!cache.entries.contains_key("removed"));
        assert!(!cache.is_tip("removed"));
        assert_eq!(cache.tip("branch"), Some("tip"));
        assert_eq!(cache.entries["branch"], sizes(80));
    }

    #[tokio::test]
    async fn remove_unknown_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".sizecache.json");

        assert!(remove(&path, &["ghost"]).await.unwrap().is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn prune_all_deletes_file() {
        let dir = TempDir::new().unwrap();
        let path = populated(&dir).await;

        assert_eq!(prune::<&str>(&path, &[]).await.unwrap(), Pruned::Emptied);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn selective_prune_keeps_named_and_last_run() {
        let dir = TempDir::new().unwrap();
        let path = populated(&dir).await;

        let pruned = prune(&path, &["bar", "branch"]).await.unwrap();
        assert_eq!(
            pruned,
            Pruned::Removed(vec!["removed".to_string(), "label".to_string()])
        );

        let cache = SizeCache::load(&path).await;
        let labels: Vec<_> = cache.entries.keys().cloned().collect();
        assert_eq!(labels, vec![LAST_RUN, "branch"]);
        assert_eq!(cache.meta.tips.len(), 1);
        assert_eq!(cache.tip("branch"), Some("tip"));
    }

    #[tokio::test]
    async fn empty_deletes_file() {
        let dir = TempDir::new().unwrap();
        let path = populated(&dir).await;

        empty(&path).await.unwrap();
        assert!(!path.exists());
    }
}
