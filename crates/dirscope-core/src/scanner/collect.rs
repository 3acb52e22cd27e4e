/// Metadata collection — the streaming second pass.
///
/// Walks the tree again and assembles one [`MetadataRecord`] per entry,
/// reading directory sizes from the precomputed map instead of re-touching
/// the filesystem. Records flow into the report sink the moment they are
/// built; nothing is buffered.
use crate::metadata::ExtendedMetadata;
use crate::model::record::{path_levels, type_label, MetadataRecord, Visibility};
use crate::model::size::bytes_to_kib;
use crate::report::{ReportError, ReportSink};
use crate::scanner::progress::{ProgressSink, PROGRESS_UPDATE_INTERVAL};
use crate::scanner::sizes::DirectorySizeMap;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Per-entry failure during collection.
///
/// Recovered locally: the entry is skipped, the error counter bumped, and
/// the walk continues. Never aborts the scan.
#[derive(Debug, Error)]
#[error("cannot stat {path}: {source}")]
pub struct EntryError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Counters accumulated by the collection pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectTotals {
    /// Directory rows emitted.
    pub directories: u64,
    /// File rows emitted.
    pub files: u64,
    /// Entries visited but skipped.
    pub errors: u64,
    /// Deepest path-level count across all visited entries, errored ones
    /// included — depth is computed before anything can fail.
    pub max_levels: usize,
}

impl CollectTotals {
    /// Rows emitted.
    pub fn processed(&self) -> u64 {
        self.directories + self.files
    }

    /// Every visited entry, accounted exactly once.
    pub fn visited(&self) -> u64 {
        self.processed() + self.errors
    }
}

/// Walk `root` and stream one record per entry into `sink`.
///
/// Ordinals are dense over successful rows: a skipped entry leaves no gap.
/// Sink failures are fatal and propagate immediately; per-entry stat
/// failures only bump the error counter.
pub fn collect_metadata(
    root: &Path,
    sizes: &DirectorySizeMap,
    provider: &dyn ExtendedMetadata,
    sink: &mut dyn ReportSink,
    progress: &mut dyn ProgressSink,
) -> Result<CollectTotals, ReportError> {
    let mut totals = CollectTotals::default();
    let mut visited: u64 = 0;

    progress.update(0, "Setting up...");

    for entry_result in WalkDir::new(root).min_depth(1).follow_links(false) {
        visited += 1;

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                totals.errors += 1;
                if let Some(path) = err.path() {
                    totals.max_levels = totals.max_levels.max(path_levels(path).len());
                }
                debug!("collect: skipping unreadable entry: {err}");
                continue;
            }
        };

        let levels = path_levels(entry.path());
        totals.max_levels = totals.max_levels.max(levels.len());

        match build_record(totals.processed() + 1, &entry, levels, sizes, provider) {
            Ok(record) => {
                sink.write_record(&record)?;
                if entry.file_type().is_dir() {
                    totals.directories += 1;
                } else {
                    totals.files += 1;
                }
            }
            Err(err) => {
                totals.errors += 1;
                debug!("collect: {err}");
            }
        }

        if visited.is_multiple_of(PROGRESS_UPDATE_INTERVAL) {
            let name = entry.file_name().to_string_lossy();
            progress.update(visited, &format!("Processing: {name}"));
        }
    }

    Ok(totals)
}

/// Assemble the record for one entry.
///
/// Directories take their size from the precomputed map (0 when absent);
/// files use their own byte length. An absent birth time is an empty
/// field, not a failure — only the stat of the entry itself can fail here.
fn build_record(
    ordinal: u64,
    entry: &DirEntry,
    levels: Vec<compact_str::CompactString>,
    sizes: &DirectorySizeMap,
    provider: &dyn ExtendedMetadata,
) -> Result<MetadataRecord, EntryError> {
    let path = entry.path();
    let meta = entry.metadata().map_err(|err| EntryError {
        path: path.to_path_buf(),
        source: err.into_io_error().unwrap_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "metadata unavailable")
        }),
    })?;

    let is_dir = entry.file_type().is_dir();
    let size_bytes = if is_dir {
        sizes.get(path).copied().unwrap_or(0)
    } else {
        meta.len()
    };

    let basename = entry.file_name().to_string_lossy();

    Ok(MetadataRecord {
        ordinal,
        path: path.display().to_string(),
        size_kb: bytes_to_kib(size_bytes),
        created: meta.created().ok().map(DateTime::<Local>::from),
        modified: meta.modified().ok().map(DateTime::<Local>::from),
        visibility: Visibility::classify(&basename),
        tags: provider.tags_of(path),
        kind: provider.kind_of(path),
        type_label: type_label(path, is_dir),
        levels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::NoExtendedMetadata;
    use crate::report::MemoryReport;
    use crate::scanner::progress::NullProgress;
    use crate::scanner::sizes::compute_directory_sizes;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_bytes(path: &Path, n: usize) {
        let mut f = fs::File::create(path).unwrap();
        f.write_all(&vec![0u8; n]).unwrap();
    }

    fn collect_into_memory(root: &Path) -> (Vec<MetadataRecord>, CollectTotals) {
        let sizes = compute_directory_sizes(root);
        let mut sink = MemoryReport::default();
        let totals = collect_metadata(
            root,
            &sizes,
            &NoExtendedMetadata,
            &mut sink,
            &mut NullProgress,
        )
        .expect("memory sink cannot fail");
        (sink.records, totals)
    }

    /// The reference scenario: root holds `x.txt` (1024 B) and `sub/`
    /// with `y.txt` (2048 B). Three rows: the folder at 2.0 KB, the files
    /// at 1.0 KB and 2.0 KB.
    #[test]
    fn scenario_tree_emits_three_records() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        write_bytes(&tmp.path().join("x.txt"), 1024);
        write_bytes(&sub.join("y.txt"), 2048);

        let (records, totals) = collect_into_memory(tmp.path());
        assert_eq!(records.len(), 3);
        assert_eq!(totals.directories, 1);
        assert_eq!(totals.files, 2);
        assert_eq!(totals.errors, 0);

        let by_path = |suffix: &str| {
            records
                .iter()
                .find(|r| r.path.ends_with(suffix))
                .unwrap_or_else(|| panic!("no record for {suffix}"))
        };

        let folder = by_path("sub");
        assert_eq!(folder.type_label, "Folder");
        assert!((folder.size_kb - 2.0).abs() < f64::EPSILON);

        assert!((by_path("x.txt").size_kb - 1.0).abs() < f64::EPSILON);
        assert!((by_path("y.txt").size_kb - 2.0).abs() < f64::EPSILON);
    }

    /// Ordinals are a dense 1..=K sequence in emission order.
    #[test]
    fn ordinals_are_dense_and_ordered() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        for i in 0..7 {
            write_bytes(&tmp.path().join(format!("f{i}.bin")), 10);
        }

        let (records, totals) = collect_into_memory(tmp.path());
        assert_eq!(totals.processed(), 7);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.ordinal, i as u64 + 1);
        }
    }

    /// Every visited entry lands in exactly one bucket.
    #[test]
    fn totals_account_every_entry_once() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(tmp.path().join("a/b")).unwrap();
        write_bytes(&tmp.path().join("a/b/deep.txt"), 5);
        write_bytes(&tmp.path().join("top.txt"), 5);

        let (records, totals) = collect_into_memory(tmp.path());
        assert_eq!(totals.visited(), records.len() as u64 + totals.errors);
        assert_eq!(totals.processed(), totals.directories + totals.files);
        assert_eq!(totals.visited(), 4);
    }

    /// Visibility and type classification flow through from real names.
    #[test]
    fn classification_from_real_entries() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        write_bytes(&tmp.path().join(".env"), 3);
        write_bytes(&tmp.path().join("~$draft.docx"), 3);
        write_bytes(&tmp.path().join("report.txt"), 3);

        let (records, _) = collect_into_memory(tmp.path());
        let find = |suffix: &str| records.iter().find(|r| r.path.ends_with(suffix)).unwrap();

        assert_eq!(find(".env").visibility, Visibility::Hidden);
        assert_eq!(find(".env").type_label, "File");
        assert_eq!(find("~$draft.docx").visibility, Visibility::Temporary);
        assert_eq!(find("~$draft.docx").type_label, "docx");
        assert_eq!(find("report.txt").visibility, Visibility::Visible);
        assert_eq!(find("report.txt").type_label, "txt");
    }

    /// Max depth covers the deepest visited entry.
    #[test]
    fn max_levels_tracks_deepest_entry() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(tmp.path().join("a/b/c")).unwrap();
        write_bytes(&tmp.path().join("a/b/c/leaf.txt"), 1);

        let (_, totals) = collect_into_memory(tmp.path());
        let root_depth = path_levels(tmp.path()).len();
        assert_eq!(totals.max_levels, root_depth + 4);
    }

    /// Directory rows read the precomputed map; a missing key degrades
    /// to zero rather than an error.
    #[test]
    fn directory_size_defaults_to_zero_without_map_entry() {
        let tmp = TempDir::new().expect("failed to create temp dir");
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let empty_map = DirectorySizeMap::new();
        let mut sink = MemoryReport::default();
        let totals = collect_metadata(
            tmp.path(),
            &empty_map,
            &NoExtendedMetadata,
            &mut sink,
            &mut NullProgress,
        )
        .unwrap();

        assert_eq!(totals.errors, 0);
        assert!(sink.records[0].size_kb.abs() < f64::EPSILON);
    }
}
