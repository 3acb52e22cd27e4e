/// Aggregate counters for a completed scan.
///
/// Accumulated monotonically during the collection pass and finalised once
/// by the pipeline; the frontend renders them as the completion summary.
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Flat statistics record for one scan run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    /// Directory that was scanned.
    pub root: PathBuf,
    /// Successfully emitted records (`directories + files`).
    pub processed: u64,
    /// Successfully emitted directory rows.
    pub directories: u64,
    /// Successfully emitted file rows.
    pub files: u64,
    /// Entries visited but skipped due to a per-entry failure.
    pub errors: u64,
    /// Maximum path-level count observed across all visited entries,
    /// including ones that later failed.
    pub max_levels: usize,
    /// Recursive total of the scan root in bytes, taken from the
    /// precomputed size map rather than from summing emitted rows.
    pub total_size: u64,
    /// Where the report was written, when a file-backed sink was used.
    pub output: Option<PathBuf>,
    /// Wall-clock duration of the whole pipeline.
    #[serde(skip)]
    pub duration: Duration,
}

impl ScanStats {
    /// Every visited entry, accounted exactly once.
    pub fn visited(&self) -> u64 {
        self.processed + self.errors
    }

    /// Total size in mebibytes, for the summary display.
    pub fn total_size_mb(&self) -> f64 {
        self.total_size as f64 / (1024.0 * 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visited_accounts_every_entry_once() {
        let stats = ScanStats {
            processed: 7,
            directories: 2,
            files: 5,
            errors: 3,
            ..Default::default()
        };
        assert_eq!(stats.visited(), 10);
        assert_eq!(stats.directories + stats.files, stats.processed);
    }

    #[test]
    fn total_size_mb_converts_bytes() {
        let stats = ScanStats {
            total_size: 3 * 1024 * 1024,
            ..Default::default()
        };
        assert!((stats.total_size_mb() - 3.0).abs() < f64::EPSILON);
    }
}
