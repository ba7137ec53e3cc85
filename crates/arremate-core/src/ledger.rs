use crate::error::ArremateError;
use crate::extraction::NoticeDocument;
use std::collections::BTreeSet;
use std::path::Path;

/// Durable set of notice names that already contributed accepted records.
///
/// The store is a line-delimited text file, one name per line. Loading
/// de-duplicates whatever the file contains; saving writes the union back,
/// so entries never disappear across runs. There is no mechanism to remove
/// or correct an entry.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: BTreeSet<String>,
}

impl Ledger {
    /// Load the ledger from `path`.
    ///
    /// A missing store is an empty ledger, not an error. A store that
    /// exists but cannot be read (permissions, invalid UTF-8) is fatal:
    /// silently treating it as empty would only reprocess work, but it
    /// would also let a real read problem go unnoticed.
    pub fn load(path: &Path) -> Result<Ledger, ArremateError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Ledger::default()),
            Err(e) => {
                return Err(ArremateError::LedgerUnreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Ok(Ledger { entries })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Keep only the documents whose name is not yet in the ledger.
    pub fn filter_unprocessed<'a>(&self, documents: &'a [NoticeDocument]) -> Vec<&'a NoticeDocument> {
        documents
            .iter()
            .filter(|doc| !self.contains(&doc.name))
            .collect()
    }

    /// Record notices that contributed accepted records. Duplicates collapse
    /// under set semantics; an empty iterator is a no-op.
    pub fn record_contributions<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.entries.insert(name.into());
        }
    }

    /// Persist the full entry set, one name per line, sorted.
    pub fn save(&self, path: &Path) -> Result<(), ArremateError> {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        std::fs::write(path, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_store_is_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::load(&dir.path().join("nope.txt")).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.txt");

        let mut ledger = Ledger::default();
        ledger.record_contributions(["A.pdf", "B.pdf"]);
        ledger.save(&path).unwrap();

        let reloaded = Ledger::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("A.pdf"));
        assert!(reloaded.contains("B.pdf"));
    }

    #[test]
    fn test_duplicate_lines_deduplicated_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.txt");
        std::fs::write(&path, "A.pdf\nB.pdf\nA.pdf\n\nB.pdf\n").unwrap();

        let ledger = Ledger::load(&path).unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_overlapping_contributions_recorded_once() {
        let mut ledger = Ledger::default();
        ledger.record_contributions(["A.pdf", "B.pdf"]);
        ledger.record_contributions(["B.pdf", "C.pdf"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_empty_contribution_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.txt");

        let mut ledger = Ledger::default();
        ledger.record_contributions(["A.pdf"]);
        ledger.save(&path).unwrap();

        let mut reloaded = Ledger::load(&path).unwrap();
        reloaded.record_contributions(Vec::<String>::new());
        reloaded.save(&path).unwrap();

        let after = Ledger::load(&path).unwrap();
        assert_eq!(after.len(), 1);
        assert!(after.contains("A.pdf"));
    }

    #[test]
    fn test_save_never_drops_prior_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.txt");
        std::fs::write(&path, "old.pdf\n").unwrap();

        let mut ledger = Ledger::load(&path).unwrap();
        ledger.record_contributions(["new.pdf"]);
        ledger.save(&path).unwrap();

        let reloaded = Ledger::load(&path).unwrap();
        assert!(reloaded.contains("old.pdf"));
        assert!(reloaded.contains("new.pdf"));
    }

    #[test]
    fn test_invalid_utf8_store_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.txt");
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let result = Ledger::load(&path);
        assert!(matches!(result, Err(ArremateError::LedgerUnreadable { .. })));
    }

    #[test]
    fn test_filter_unprocessed() {
        let mut ledger = Ledger::default();
        ledger.record_contributions(["seen.pdf"]);

        let docs = vec![
            NoticeDocument::new("seen.pdf", vec!["x".into()]),
            NoticeDocument::new("fresh.pdf", vec!["y".into()]),
        ];
        let remaining = ledger.filter_unprocessed(&docs);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "fresh.pdf");
    }
}
