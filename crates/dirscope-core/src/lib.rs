/// DirScope Core — scanning, aggregation, and report generation.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (CLI, GUI, TUI).
///
/// # Modules
///
/// - [`model`] — Metadata records, scan statistics, and size formatting.
/// - [`scanner`] — The sequential three-pass pipeline: pre-scan count,
///   bottom-up directory-size aggregation, and streaming metadata collection.
/// - [`metadata`] — The extended-metadata provider seam (tags / kind).
/// - [`platform`] — macOS Spotlight (`mdls`) integration.
/// - [`report`] — Report sinks: CSV, JSON Lines, and in-memory.
pub mod metadata;
pub mod model;
pub mod platform;
pub mod report;
pub mod scanner;
