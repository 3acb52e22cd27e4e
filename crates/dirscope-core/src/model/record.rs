/// A single row of the output report.
///
/// One record is produced per filesystem entry (file or directory) during
/// the collection pass. Records are created transiently, pushed into a
/// report sink immediately, and never mutated again.
use chrono::{DateTime, Local};
use compact_str::CompactString;
use serde::Serialize;
use std::path::{Component, Path};

/// Visibility classification derived from the entry's basename prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Ordinary entry.
    Visible,
    /// Dotfile (basename starts with `.`).
    Hidden,
    /// Office-style lock/autosave file (basename starts with `~$`).
    Temporary,
}

impl Visibility {
    /// Classify a basename by its prefix.
    pub fn classify(basename: &str) -> Self {
        if basename.starts_with('.') {
            Self::Hidden
        } else if basename.starts_with("~$") {
            Self::Temporary
        } else {
            Self::Visible
        }
    }

    /// Lowercase label used in report cells.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
            Self::Temporary => "temporary",
        }
    }
}

/// One row per filesystem entry.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataRecord {
    /// 1-based row number, dense over successfully emitted records.
    pub ordinal: u64,
    /// Absolute path of the entry.
    pub path: String,
    /// Size in kibibytes. Directories use the precomputed recursive total;
    /// files use their own byte length.
    pub size_kb: f64,
    /// Birth timestamp. `None` where the filesystem exposes no birth time.
    pub created: Option<DateTime<Local>>,
    /// Last-modified timestamp.
    pub modified: Option<DateTime<Local>>,
    /// Basename-prefix visibility classification.
    pub visibility: Visibility,
    /// Comma-joined extended tags. Empty when no provider is available.
    pub tags: String,
    /// Descriptive kind string (e.g. "PDF Document"). Possibly empty.
    pub kind: String,
    /// `Folder` for directories, the extension without its dot, or `File`.
    pub type_label: CompactString,
    /// Path-separator-delimited segments from root to the entry,
    /// empty segments dropped.
    pub levels: Vec<CompactString>,
}

/// Entry-type label: `"Folder"` for directories; otherwise the extension
/// without its leading dot, or `"File"` when there is none.
///
/// A leading dot is not an extension — `.env` is an extensionless hidden
/// file, not an "env" file.
pub fn type_label(path: &Path, is_dir: bool) -> CompactString {
    if is_dir {
        return CompactString::const_new("Folder");
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => CompactString::new(ext),
        _ => CompactString::const_new("File"),
    }
}

/// Split an absolute path into its ordered level names, dropping the root
/// and any prefix component, so `/a/b/c.txt` yields `["a", "b", "c.txt"]`.
pub fn path_levels(path: &Path) -> Vec<CompactString> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(CompactString::new(name.to_string_lossy())),
            _ => None,
        })
        .collect()
}
