/// Scanner module — the sequential three-pass pipeline.
///
/// A scan is three strictly ordered traversals of one tree:
/// 1. **Pre-scan** ([`prescan`]) — count items and max depth for the
///    progress denominator and the header's `Level` columns.
/// 2. **Size aggregation** ([`compute_directory_sizes`]) — build the
///    read-only recursive-size map in a single bottom-up pass.
/// 3. **Collection** ([`collect_metadata`]) — stream one metadata row per
///    entry into the report sink, reading directory sizes from the map.
///
/// Everything runs on the caller's thread; the map has exactly one writer
/// and it finishes before any reader starts.
pub mod collect;
pub mod prescan;
pub mod progress;
pub mod sizes;

pub use collect::{collect_metadata, CollectTotals, EntryError};
pub use prescan::{prescan, PreScan};
pub use progress::{NullProgress, ProgressSink, PROGRESS_UPDATE_INTERVAL};
pub use sizes::{compute_directory_sizes, DirectorySizeMap};

use crate::metadata::ExtendedMetadata;
use crate::model::ScanStats;
use crate::report::{ReportError, ReportSink};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Fatal scan failure — surfaced to the caller instead of a stats payload.
///
/// Per-entry and per-directory failures never end up here; they degrade
/// locally and are only counted.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read scan root {path}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("nothing to process under {0}")]
    NothingToProcess(PathBuf),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Run the full pipeline against `root` and stream the report into `sink`.
///
/// Returns the finalised statistics on success. The reported total size
/// comes from the size map's root entry, not from summing emitted rows, so
/// it stays correct even when entries were skipped due to errors.
pub fn run_scan(
    root: &Path,
    sink: &mut dyn ReportSink,
    provider: &dyn ExtendedMetadata,
    progress: &mut dyn ProgressSink,
) -> Result<ScanStats, ScanError> {
    let start = Instant::now();

    // The root must at least be listable; anything deeper degrades locally.
    std::fs::read_dir(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let pre = prescan(root);
    debug!(
        "pre-scan: {} items, {} levels under {}",
        pre.total_items,
        pre.max_levels,
        root.display()
    );
    if pre.total_items == 0 {
        return Err(ScanError::NothingToProcess(root.to_path_buf()));
    }
    progress.begin(pre.total_items);

    let sizes = compute_directory_sizes(root);
    debug!("size map covers {} directories", sizes.len());

    sink.write_header(pre.max_levels)?;
    let totals = collect_metadata(root, &sizes, provider, sink, progress)?;

    progress.update(totals.visited(), "Formatting and saving...");
    sink.finish()?;

    let stats = ScanStats {
        root: root.to_path_buf(),
        processed: totals.processed(),
        directories: totals.directories,
        files: totals.files,
        errors: totals.errors,
        max_levels: totals.max_levels,
        total_size: sizes.get(root).copied().unwrap_or(0),
        output: None,
        duration: start.elapsed(),
    };
    info!(
        "scan of {} complete: {} rows, {} errors, {} bytes in {:?}",
        root.display(),
        stats.processed,
        stats.errors,
        stats.total_size,
        stats.duration
    );
    Ok(stats)
}
