/// The sealed scan report.
///
/// A plain value object: the scanner thread builds it and hands it over by
/// value; renderers only read it. Field order is the order renderers and
/// the JSON export present the statistics in.
use super::extensions::ExtensionCount;
use crate::model::FileRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_files: u64,
    pub total_bytes: u64,
    pub average_file_size_bytes: u64,
    /// Largest files, descending by size.
    pub top_files: Vec<FileRecord>,
    /// Most frequent extensions, descending by count.
    pub top_extensions: Vec<ExtensionCount>,
    /// `false` when the scan was cancelled before the walk finished.
    pub completed: bool,
}

impl Report {
    /// A report for a scan that observed nothing.
    pub fn empty(completed: bool) -> Self {
        Self {
            total_files: 0,
            total_bytes: 0,
            average_file_size_bytes: 0,
            top_files: Vec::new(),
            top_extensions: Vec::new(),
            completed,
        }
    }
}
