/// scanstat core — incremental scan statistics, traversal and rendering.
///
/// This crate has no UI dependencies; the `scanstat` binary is a thin CLI
/// on top of it.
///
/// # Modules
///
/// - [`analysis`] — The aggregator: extension counts, bounded top files, report.
/// - [`model`] — File records and size formatting helpers.
/// - [`scanner`] — Directory walk driver and background scan handle.
/// - [`export`] — Text table, HTML, JSON and CSV renderings of a report.
/// - [`error`] — Scan and export error types.
pub mod analysis;
pub mod error;
pub mod export;
pub mod model;
pub mod scanner;

pub use analysis::{Report, ScanAggregate};
pub use error::{ExportError, ScanError};
pub use scanner::{start_scan, ScanHandle, ScanOptions, ScanOutcome};
