/// Terminal progress bar — the `ProgressSink` implementation for
/// interactive runs.
use dirscope_core::scanner::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// An `indicatif` bar fed by the core pipeline.
///
/// Starts as a spinner (the pre-scan has not supplied a denominator yet)
/// and switches to a bounded bar on `begin`.
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_message("Counting items...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Clear the bar so the completion summary prints on a clean line.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for TerminalProgress {
    fn begin(&mut self, total_items: u64) {
        self.bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                .expect("static template is valid"),
        );
        self.bar.set_length(total_items);
        self.bar.set_position(0);
    }

    fn update(&mut self, processed: u64, status: &str) {
        self.bar.set_position(processed);
        self.bar.set_message(status.to_string());
    }
}
