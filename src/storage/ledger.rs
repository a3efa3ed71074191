//! In-memory ledger store
//!
//! Holds accepted entries in insertion order for the lifetime of a
//! session. Nothing here touches the filesystem.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, EntryId};

/// Ordered collection of accepted entries
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    entries: Vec<Entry>,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry after the current last element
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`, shifting later entries down by one
    pub fn delete_at(&mut self, index: usize) -> LedgerResult<Entry> {
        if index >= self.entries.len() {
            return Err(LedgerError::RowOutOfRange {
                row: index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Remove the entry with the given identity
    pub fn delete(&mut self, id: EntryId) -> LedgerResult<Entry> {
        let index = self
            .position(id)
            .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;
        self.delete_at(index)
    }

    /// Store index of the entry with the given identity
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a LedgerStore {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validator::{validate, Candidate};

    fn entry(description: &str, category: &str) -> Entry {
        validate(
            &Candidate::new()
                .description(description)
                .amount("1.25")
                .category(category),
        )
        .unwrap()
    }

    fn descriptions(store: &LedgerStore) -> Vec<&str> {
        store.iter().map(Entry::description).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = LedgerStore::new();
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_preserves_submission_order() {
        let mut store = LedgerStore::new();
        for name in ["One", "Two", "Three", "Four"] {
            store.append(entry(name, "groceries"));
        }
        assert_eq!(store.len(), 4);
        assert_eq!(descriptions(&store), vec!["One", "Two", "Three", "Four"]);
    }

    #[test]
    fn test_delete_at_removes_exactly_one() {
        let mut store = LedgerStore::new();
        for name in ["Aaa", "Bbb", "Ccc", "Ddd"] {
            store.append(entry(name, "groceries"));
        }

        let removed = store.delete_at(1).unwrap();
        assert_eq!(removed.description(), "Bbb");
        assert_eq!(store.len(), 3);
        assert_eq!(descriptions(&store), vec!["Aaa", "Ccc", "Ddd"]);
    }

    #[test]
    fn test_delete_at_out_of_range() {
        let mut store = LedgerStore::new();
        store.append(entry("Aaa", "groceries"));

        let err = store.delete_at(1).unwrap_err();
        assert!(matches!(err, LedgerError::RowOutOfRange { row: 1, len: 1 }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_by_identity() {
        let mut store = LedgerStore::new();
        let keep = entry("Keep", "utilities");
        let drop = entry("Drop", "utilities");
        let drop_id = drop.id();
        store.append(keep);
        store.append(drop);

        assert_eq!(store.position(drop_id), Some(1));
        let removed = store.delete(drop_id).unwrap();
        assert_eq!(removed.id(), drop_id);
        assert_eq!(descriptions(&store), vec!["Keep"]);

        assert!(store.delete(drop_id).unwrap_err().is_not_found());
    }
}
