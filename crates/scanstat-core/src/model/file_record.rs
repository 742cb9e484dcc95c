/// A single regular file observed during a scan.
///
/// Records are immutable once built. The bounded top-files list owns the
/// records it retains; everything else only sees copies in a `Report`.
use compact_str::CompactString;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// File name only (not the full path).
    name: CompactString,
    /// Logical file size in bytes.
    size_bytes: u64,
}

impl FileRecord {
    pub fn new(name: impl Into<CompactString>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}
