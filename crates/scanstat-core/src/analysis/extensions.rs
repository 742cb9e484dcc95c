/// Extension frequency counting.
///
/// Counts how often each file extension occurs during a scan and extracts
/// the most frequent ones. Extensions are stored with their leading dot
/// (".txt") and compared case-sensitively.
use compact_str::CompactString;
use serde::Serialize;
use std::collections::HashMap;

/// One row of the "most frequent extensions" result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionCount {
    pub extension: CompactString,
    pub count: u64,
}

/// Extract the extension of a file name, including the leading dot.
///
/// The extension starts at the last `.` in `name`, but only when that dot
/// is neither the first nor the last character. `"notes.txt"` gives
/// `".txt"`; `"README"`, `".bashrc"`, `"archive."` and `"..."` give `None`.
pub fn extension_of(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < name.len() => Some(&name[dot..]),
        _ => None,
    }
}

/// Extension → occurrence count, remembering first-insertion order.
///
/// Entries live in a `Vec` in the order they were first seen; `index` maps
/// an extension to its slot. Counts only ever grow and keys are never
/// removed, so every stored count is at least 1.
#[derive(Debug, Default, Clone)]
pub struct ExtensionFrequencyTable {
    entries: Vec<ExtensionCount>,
    index: HashMap<CompactString, usize>,
}

impl ExtensionFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `extension`.
    ///
    /// Empty strings, a bare `"."`, and strings without a leading dot are
    /// ignored.
    pub fn increment(&mut self, extension: &str) {
        if extension.len() < 2 || !extension.starts_with('.') {
            return;
        }

        if let Some(&slot) = self.index.get(extension) {
            self.entries[slot].count += 1;
            return;
        }

        let key = CompactString::new(extension);
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(ExtensionCount {
            extension: key,
            count: 1,
        });
    }

    /// The `n` most frequent extensions, highest count first.
    ///
    /// Equal counts keep first-seen order because the sort is stable and
    /// runs over entries already in insertion order.
    pub fn top_n(&self, n: usize) -> Vec<ExtensionCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }

    /// Occurrences recorded for `extension` (0 if never seen).
    pub fn count(&self, extension: &str) -> u64 {
        self.index
            .get(extension)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct extensions seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(rows: &[ExtensionCount]) -> Vec<(&str, u64)> {
        rows.iter().map(|r| (r.extension.as_str(), r.count)).collect()
    }

    // ── extension_of ─────────────────────────────────────────────────────

    #[test]
    fn extension_of_regular_names() {
        assert_eq!(extension_of("notes.txt"), Some(".txt"));
        assert_eq!(extension_of("archive.tar.gz"), Some(".gz"));
        assert_eq!(extension_of("a.b"), Some(".b"));
    }

    #[test]
    fn extension_of_names_without_extension() {
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(""), None);
    }

    /// Hidden files with no further suffix have no extension.
    #[test]
    fn extension_of_leading_dot_only() {
        assert_eq!(extension_of(".bashrc"), None);
        assert_eq!(extension_of(".config.toml"), Some(".toml"));
    }

    #[test]
    fn extension_of_trailing_dot_or_all_dots() {
        assert_eq!(extension_of("archive."), None);
        assert_eq!(extension_of("."), None);
        assert_eq!(extension_of(".."), None);
        assert_eq!(extension_of("..."), None);
    }

    #[test]
    fn extension_of_keeps_case() {
        assert_eq!(extension_of("PHOTO.JPG"), Some(".JPG"));
    }

    // ── increment ────────────────────────────────────────────────────────

    #[test]
    fn increment_creates_then_counts() {
        let mut table = ExtensionFrequencyTable::new();
        table.increment(".rs");
        table.increment(".rs");
        table.increment(".toml");
        assert_eq!(table.count(".rs"), 2);
        assert_eq!(table.count(".toml"), 1);
        assert_eq!(table.count(".md"), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn increment_ignores_invalid_extensions() {
        let mut table = ExtensionFrequencyTable::new();
        table.increment("");
        table.increment(".");
        table.increment("txt");
        assert!(table.is_empty());
    }

    // ── top_n ────────────────────────────────────────────────────────────

    #[test]
    fn top_n_sorted_by_count_descending() {
        let mut table = ExtensionFrequencyTable::new();
        for ext in [".a", ".b", ".b", ".c", ".c", ".c"] {
            table.increment(ext);
        }
        assert_eq!(
            pairs(&table.top_n(5)),
            vec![(".c", 3), (".b", 2), (".a", 1)]
        );
    }

    /// Equal counts rank by first appearance, not by key or hash order.
    #[test]
    fn top_n_ties_keep_first_seen_order() {
        let mut table = ExtensionFrequencyTable::new();
        for ext in [".zip", ".md", ".png", ".md", ".zip", ".png", ".exe"] {
            table.increment(ext);
        }
        assert_eq!(
            pairs(&table.top_n(3)),
            vec![(".zip", 2), (".md", 2), (".png", 2)]
        );
    }

    #[test]
    fn top_n_truncates_and_handles_short_tables() {
        let mut table = ExtensionFrequencyTable::new();
        for ext in [".a", ".b", ".c", ".d", ".e", ".f", ".g"] {
            table.increment(ext);
        }
        assert_eq!(table.top_n(5).len(), 5);
        assert_eq!(table.top_n(50).len(), 7);
        assert!(table.top_n(0).is_empty());
        assert!(ExtensionFrequencyTable::new().top_n(5).is_empty());
    }

    #[test]
    fn top_n_does_not_mutate_the_table() {
        let mut table = ExtensionFrequencyTable::new();
        for ext in [".x", ".y", ".y"] {
            table.increment(ext);
        }
        let first = table.top_n(5);
        let second = table.top_n(5);
        assert_eq!(first, second);
        // A later tie with .y must still rank .x (seen first) ahead.
        table.increment(".x");
        assert_eq!(pairs(&table.top_n(5)), vec![(".x", 2), (".y", 2)]);
    }
}
