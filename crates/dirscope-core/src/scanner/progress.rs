/// Progress reporting — a callback seam the pipeline pushes into.
///
/// The core holds no UI state; a frontend implements [`ProgressSink`]
/// (terminal bar, GUI window, …) and receives `(processed, status)` pushes
/// at a cadence decoupled from correctness.

/// How many visited entries between progress pushes.
///
/// Pushing on every entry would dominate small-file scans with display
/// work; every 10th entry keeps the indicator live without measurable
/// overhead. A throttling policy for responsiveness only — sinks must not
/// rely on receiving any particular sequence of positions.
pub const PROGRESS_UPDATE_INTERVAL: u64 = 10;

/// Output sink for scan progress.
pub trait ProgressSink {
    /// Called once after the pre-scan with the total item count, so the
    /// sink can scale itself. Default: ignore the denominator.
    fn begin(&mut self, total_items: u64) {
        let _ = total_items;
    }

    /// Push the number of items processed so far and a human-readable
    /// status line.
    fn update(&mut self, processed: u64, status: &str);
}

/// No-op sink for headless runs and tests.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&mut self, _processed: u64, _status: &str) {}
}
