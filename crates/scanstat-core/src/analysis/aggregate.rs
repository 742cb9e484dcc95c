/// Incremental scan statistics.
///
/// `ScanAggregate` consumes one observation per regular file and keeps
/// running totals, the extension table and the bounded top-files list up
/// to date. It performs no I/O and never blocks, so a report taken at any
/// point reflects every observation made so far.
///
/// # Lifecycle
///
/// An aggregate is open while it exists; [`ScanAggregate::finalize`]
/// consumes it and returns the sealed [`Report`]. Observing after sealing
/// does not compile.
use super::extensions::{extension_of, ExtensionFrequencyTable};
use super::report::Report;
use super::top_files::BoundedTopKBySize;
use super::{MAX_TOP_EXTENSIONS, MAX_TOP_FILES};
use crate::model::FileRecord;

#[derive(Debug, Clone)]
pub struct ScanAggregate {
    total_files: u64,
    total_bytes: u64,
    top_files: BoundedTopKBySize,
    ext_freq: ExtensionFrequencyTable,
    top_extensions: usize,
}

impl Default for ScanAggregate {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanAggregate {
    /// Aggregate keeping the default 10 largest files and 5 extensions.
    pub fn new() -> Self {
        Self::with_limits(MAX_TOP_FILES, MAX_TOP_EXTENSIONS)
    }

    pub fn with_limits(top_files: usize, top_extensions: usize) -> Self {
        Self {
            total_files: 0,
            total_bytes: 0,
            top_files: BoundedTopKBySize::new(top_files),
            ext_freq: ExtensionFrequencyTable::new(),
            top_extensions,
        }
    }

    /// Record one regular file.
    pub fn observe(&mut self, name: &str, size_bytes: u64) {
        self.total_files += 1;
        self.total_bytes = self.total_bytes.saturating_add(size_bytes);

        if let Some(ext) = extension_of(name) {
            self.ext_freq.increment(ext);
        }

        self.top_files.consider(FileRecord::new(name, size_bytes));
    }

    pub fn total_files(&self) -> u64 {
        self.total_files
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Mean size in bytes, rounded down; 0 when nothing was observed.
    pub fn average_file_size_bytes(&self) -> u64 {
        if self.total_files == 0 {
            0
        } else {
            self.total_bytes / self.total_files
        }
    }

    pub fn top_files(&self) -> &BoundedTopKBySize {
        &self.top_files
    }

    pub fn extensions(&self) -> &ExtensionFrequencyTable {
        &self.ext_freq
    }

    /// Snapshot of the statistics so far. The scan is still open, so the
    /// report is marked incomplete.
    pub fn report(&self) -> Report {
        self.build_report(false)
    }

    /// Seal the scan. `completed` is `false` when the walk was cancelled.
    pub fn finalize(self, completed: bool) -> Report {
        self.build_report(completed)
    }

    fn build_report(&self, completed: bool) -> Report {
        Report {
            total_files: self.total_files,
            total_bytes: self.total_bytes,
            average_file_size_bytes: self.average_file_size_bytes(),
            top_files: self.top_files.snapshot(),
            top_extensions: self.ext_freq.top_n(self.top_extensions),
            completed,
        }
    }
}
