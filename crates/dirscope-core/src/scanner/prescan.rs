/// Pre-scan — a cheap counting walk ahead of the two main passes.
///
/// Supplies the progress denominator and the number of `Level` columns in
/// the report header. It has no correctness dependency: if it were omitted,
/// only the progress signal would lose its denominator.
use crate::model::record::path_levels;
use std::path::Path;
use walkdir::WalkDir;

/// Totals gathered by the pre-scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreScan {
    /// Entries below the root (the root itself is never a report row).
    pub total_items: u64,
    /// Deepest path-level count observed.
    pub max_levels: usize,
}

/// Count items and the maximum path depth under `root`.
///
/// Entries that error mid-walk still count toward the total — the
/// collection pass visits them too — and contribute their depth when the
/// failing path is known.
pub fn prescan(root: &Path) -> PreScan {
    let mut out = PreScan::default();
    for entry_result in WalkDir::new(root).min_depth(1).follow_links(false) {
        out.total_items += 1;
        let depth = match &entry_result {
            Ok(entry) => path_levels(entry.path()).len(),
            Err(err) => err.path().map(|p| path_levels(p).len()).unwrap_or(0),
        };
        out.max_levels = out.max_levels.max(depth);
    }
    out
}
