/// Top-K largest files, maintained incrementally.
///
/// Keeps at most `capacity` records in a `Vec` sorted descending by size, so
/// memory stays O(K) however many files a scan visits. Each candidate costs
/// a binary search plus an O(K) `Vec::insert`, which is fine for the small,
/// fixed K used here.
///
/// # Tie policy
///
/// Among equal sizes the earlier arrival ranks first. While the list has
/// room, equal-size files are admitted; once it is full a newcomer must be
/// strictly larger than the smallest retained file, so equal-size arrivals
/// are rejected (first-observed wins).
use crate::model::FileRecord;

#[derive(Debug, Clone)]
pub struct BoundedTopKBySize {
    capacity: usize,
    records: Vec<FileRecord>,
}

impl BoundedTopKBySize {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::new(),
        }
    }

    /// Offer a record for inclusion.
    pub fn consider(&mut self, record: FileRecord) {
        let size = record.size_bytes();
        if self.records.len() >= self.capacity {
            match self.records.last() {
                Some(smallest) if size > smallest.size_bytes() => {}
                _ => return,
            }
        }

        // First slot holding a strictly smaller file: after every equal one.
        let pos = self.records.partition_point(|r| r.size_bytes() >= size);
        self.records.insert(pos, record);

        if self.records.len() > self.capacity {
            self.records.pop();
        }
    }

    /// Owned copy of the retained records, largest first.
    pub fn snapshot(&self) -> Vec<FileRecord> {
        self.records.clone()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
