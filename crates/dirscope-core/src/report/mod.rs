/// Report sinks — where the ordered row sequence goes.
///
/// The pipeline streams each [`MetadataRecord`] into a [`ReportSink`] the
/// moment it is produced; presentation concerns (column widths, cell
/// styling, spreadsheet features) live entirely behind this boundary.
pub mod csv;
pub mod json;

use crate::model::MetadataRecord;
use thiserror::Error;

pub use csv::CsvReport;
pub use json::JsonLinesReport;

/// The nine fixed leading columns of every report, followed by one
/// `Level N` column per observed path depth.
pub const FIXED_COLUMNS: [&str; 9] = [
    "#",
    "Path",
    "Size (KB)",
    "Creation Date",
    "Last Modified",
    "Is Hidden?",
    "Tags",
    "Kind",
    "File Type",
];

/// Build the full header row for a report with `max_levels` depth columns.
pub fn header_row(max_levels: usize) -> Vec<String> {
    let mut headers: Vec<String> = FIXED_COLUMNS.iter().map(|s| s.to_string()).collect();
    headers.extend((1..=max_levels).map(|i| format!("Level {i}")));
    headers
}

/// Failure while persisting the report. Persistence errors are fatal to
/// the whole scan, unlike per-entry errors.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report I/O failure")]
    Io(#[from] std::io::Error),
    #[error("CSV write failure")]
    Csv(#[from] ::csv::Error),
    #[error("JSON write failure")]
    Json(#[from] serde_json::Error),
}

/// Consumer of the ordered record sequence.
///
/// Calls arrive strictly as `write_header`, then `write_record` once per
/// row in ordinal order, then `finish` exactly once.
pub trait ReportSink {
    /// Write the header row. `max_levels` fixes the `Level N` column count.
    fn write_header(&mut self, max_levels: usize) -> Result<(), ReportError>;

    /// Append one row.
    fn write_record(&mut self, record: &MetadataRecord) -> Result<(), ReportError>;

    /// Flush and close out the report.
    fn finish(&mut self) -> Result<(), ReportError>;
}

/// In-memory sink: keeps the rows as values.
///
/// Used by tests and by frontends that post-process records instead of
/// writing a file.
#[derive(Debug, Default)]
pub struct MemoryReport {
    /// Level-column count announced by the header, when one was written.
    pub max_levels: Option<usize>,
    /// Collected rows, in emission order.
    pub records: Vec<MetadataRecord>,
    /// Whether `finish` has been called.
    pub finished: bool,
}

impl ReportSink for MemoryReport {
    fn write_header(&mut self, max_levels: usize) -> Result<(), ReportError> {
        self.max_levels = Some(max_levels);
        Ok(())
    }

    fn write_record(&mut self, record: &MetadataRecord) -> Result<(), ReportError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.finished = true;
        Ok(())
    }
}
