/// JSON Lines report sink — one serialised record per line.
///
/// Rows are self-describing, so the header carries no information here;
/// the sink still records the announced depth for consumers that ask.
use super::{ReportError, ReportSink};
use crate::model::MetadataRecord;
use std::io::Write;
use std::path::Path;

/// Streams records as newline-delimited JSON.
pub struct JsonLinesReport<W: Write> {
    out: W,
}

impl JsonLinesReport<std::io::BufWriter<std::fs::File>> {
    /// Create a report file at `path`.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = std::fs::File::create(path)?;
        Ok(Self::from_writer(std::io::BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesReport<W> {
    /// Wrap an arbitrary writer.
    pub fn from_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ReportSink for JsonLinesReport<W> {
    fn write_header(&mut self, _max_levels: usize) -> Result<(), ReportError> {
        Ok(())
    }

    fn write_record(&mut self, record: &MetadataRecord) -> Result<(), ReportError> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.out.flush()?;
        Ok(())
    }
}
