/// Data model — metadata records, scan statistics, size formatting.
pub mod record;
pub mod size;
pub mod stats;

pub use record::{path_levels, type_label, MetadataRecord, Visibility};
pub use stats::ScanStats;
