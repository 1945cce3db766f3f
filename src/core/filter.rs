//! Known-word exclusion.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::debug;

use super::frequency::FrequencyTable;

/// Remove from `target` every word that also appears in `exclude`.
///
/// One parallel work item per key in a snapshot of `target`; each probes
/// `exclude` and deletes the key from `target` on a hit. `exclude` is only
/// read. Returns the number of removed words once every work item is done.
pub fn remove_known(target: &FrequencyTable, exclude: &FrequencyTable) -> usize {
    if target.is_empty() || exclude.is_empty() {
        return 0;
    }

    let removed = AtomicUsize::new(0);
    target.keys().par_iter().for_each(|word| {
        if exclude.contains(word) && target.delete(word) {
            removed.fetch_add(1, Ordering::Relaxed);
        }
    });

    let removed = removed.into_inner();
    debug!(
        "Removed {} known words, {} remain",
        removed,
        target.len()
    );
    removed
}
