/// Command-line argument definition.
use chrono::{DateTime, Local};
use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::{Path, PathBuf};

/// Scan a directory tree and export per-item metadata to a tabular report.
#[derive(Debug, Parser)]
#[command(name = "dirscope", version, about)]
pub struct Args {
    /// Directory to scan.
    pub path: PathBuf,

    /// Output file. Defaults to `<dirname>_<timestamp>.<ext>` in the
    /// current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Look up Finder tags and kind through Spotlight (macOS only;
    /// silently degrades to empty columns elsewhere).
    #[arg(long)]
    pub extended: bool,

    /// Suppress the progress bar.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Newline-delimited JSON, one record per line.
    Jsonl,
}

impl OutputFormat {
    /// File extension for default output names.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Jsonl => "jsonl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Default report name: the scanned directory's basename plus a timestamp,
/// e.g. `Documents_20260806_142500.csv`.
pub fn default_output_name(root: &Path, format: OutputFormat, now: DateTime<Local>) -> PathBuf {
    let stem = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scan".to_string());
    PathBuf::from(format!(
        "{stem}_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    ))
}
