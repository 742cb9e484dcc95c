/// Scan configuration.
use crate::analysis::{MAX_TOP_EXTENSIONS, MAX_TOP_FILES};

/// Tunables for a single scan run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// How many of the largest files the report keeps.
    pub top_files: usize,
    /// How many of the most frequent extensions the report lists.
    pub top_extensions: usize,
    /// Emit a progress update every this many files. Values below 1 are
    /// treated as 1.
    pub progress_every: u64,
    /// Skip dot-files and dot-directories during the walk.
    pub skip_hidden: bool,
}

/// Default progress cadence, in files.
pub const DEFAULT_PROGRESS_EVERY: u64 = 1_000;

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            top_files: MAX_TOP_FILES,
            top_extensions: MAX_TOP_EXTENSIONS,
            progress_every: DEFAULT_PROGRESS_EVERY,
            skip_hidden: false,
        }
    }
}
