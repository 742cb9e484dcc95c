/// Scan progress reporting — lightweight messages sent from the scan
/// thread through a bounded crossbeam channel.
///
/// Progress is advisory. Messages are sent with `try_send`, so a slow or
/// absent reader only loses updates; the finished report is returned through
/// [`super::ScanHandle::join`] and never depends on this channel.
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanProgress {
    /// Periodic update with running totals.
    Update {
        files_found: u64,
        total_bytes: u64,
        current_path: String,
    },
    /// An entry was skipped (e.g. permission denied on one directory).
    Error { path: String, message: String },
    /// The walk finished.
    Complete {
        duration: Duration,
        error_count: u64,
    },
    /// The walk stopped early on request.
    Cancelled { files_found: u64 },
}
