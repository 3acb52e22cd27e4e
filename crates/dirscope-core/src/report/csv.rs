/// CSV report sink.
///
/// Rows are padded to the header width so every record has the same column
/// count regardless of its own depth; sizes render with two decimals and
/// timestamps as `YYYY-MM-DD HH:MM:SS`, the formats the report consumers
/// expect.
use super::{header_row, ReportError, ReportSink};
use crate::model::MetadataRecord;
use ::csv::{Writer, WriterBuilder};
use std::io::Write;
use std::path::Path;

/// Cell rendering of record timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Streams records into a CSV writer.
pub struct CsvReport<W: Write> {
    writer: Writer<W>,
    /// Row width fixed by the header; 0 until the header is written.
    width: usize,
}

impl CsvReport<std::fs::File> {
    /// Create a report file at `path`.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        Ok(Self::from_writer(std::fs::File::create(path)?))
    }
}

impl<W: Write> CsvReport<W> {
    /// Wrap an arbitrary writer.
    ///
    /// The underlying writer is flexible about record lengths so that a
    /// row deeper than the pre-scanned maximum (tree mutated between
    /// passes) degrades to a long row instead of aborting the report.
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: WriterBuilder::new().flexible(true).from_writer(writer),
            width: 0,
        }
    }

    fn render_row(&self, record: &MetadataRecord) -> Vec<String> {
        let timestamp = |t: &Option<chrono::DateTime<chrono::Local>>| {
            t.map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default()
        };

        let mut row = Vec::with_capacity(self.width.max(9 + record.levels.len()));
        row.push(record.ordinal.to_string());
        row.push(record.path.clone());
        row.push(format!("{:.2}", record.size_kb));
        row.push(timestamp(&record.created));
        row.push(timestamp(&record.modified));
        row.push(record.visibility.as_str().to_string());
        row.push(record.tags.clone());
        row.push(record.kind.clone());
        row.push(record.type_label.to_string());
        row.extend(record.levels.iter().map(|l| l.to_string()));
        while row.len() < self.width {
            row.push(String::new());
        }
        row
    }
}

impl<W: Write> ReportSink for CsvReport<W> {
    fn write_header(&mut self, max_levels: usize) -> Result<(), ReportError> {
        let headers = header_row(max_levels);
        self.width = headers.len();
        self.writer.write_record(&headers)?;
        Ok(())
    }

    fn write_record(&mut self, record: &MetadataRecord) -> Result<(), ReportError> {
        self.writer.write_record(&self.render_row(record))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}
