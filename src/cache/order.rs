//! Display order of cache labels

use super::model::{is_reserved, SizeCache};

/// Labels of `cache` in display order.
///
/// Sort keys, in priority order:
/// 1. labels with data before labels without
/// 2. branch tips before other labels
/// 3. ordinary labels before reserved ones (such as the last run)
/// 4. first-recorded order
pub fn ordered_labels(cache: &SizeCache) -> Vec<&str> {
    let mut labels: Vec<&str> = cache.entries.keys().map(String::as_str).collect();

    // sort_by_key is stable, so insertion order breaks ties
    labels.sort_by_key(|label| {
        let empty = cache.entries.get(*label).is_none_or(|sizes| sizes.is_empty());
        (empty, !cache.is_tip(label), is_reserved(label))
    });

    labels
}
