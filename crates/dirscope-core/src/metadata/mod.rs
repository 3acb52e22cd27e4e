/// Extended-metadata provider seam.
///
/// Platform metadata (Finder tags, kind descriptions) comes from external
/// tooling the core cannot depend on. The collector consumes it through
/// this trait as two pure functions of a path; implementations must
/// tolerate being unavailable and answer with an empty string rather than
/// propagating an error into the record.
use std::path::Path;

/// Per-entry extended metadata lookup.
pub trait ExtendedMetadata {
    /// Comma-joined tag list for the entry. Possibly empty.
    fn tags_of(&self, path: &Path) -> String;

    /// Descriptive kind string (e.g. "PDF Document"). Possibly empty.
    fn kind_of(&self, path: &Path) -> String;
}

/// Provider used when no platform metadata source is available:
/// every lookup answers with an empty string.
pub struct NoExtendedMetadata;

impl ExtendedMetadata for NoExtendedMetadata {
    fn tags_of(&self, _path: &Path) -> String {
        String::new()
    }

    fn kind_of(&self, _path: &Path) -> String {
        String::new()
    }
}
