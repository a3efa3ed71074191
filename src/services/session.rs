//! Ledger session
//!
//! Owns the store and the filter selection for one run of the program and
//! is the only place that mutates either. Presentation code (TUI or batch
//! runner) holds a session and talks to it through these methods.

use tracing::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, Entry, EntryId};
use crate::storage::LedgerStore;

use super::filter::{self, FilterSelection};
use super::validator::{validate, Candidate, FieldErrors};

/// Store plus filter selection
#[derive(Debug, Default)]
pub struct LedgerSession {
    store: LedgerStore,
    filter: FilterSelection,
}

impl LedgerSession {
    /// Start an empty session showing every entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a candidate and append it when it passes
    pub fn submit(&mut self, candidate: &Candidate) -> Result<EntryId, FieldErrors> {
        match validate(candidate) {
            Ok(entry) => {
                let id = entry.id();
                info!(%id, entry = %entry, "Entry added");
                self.store.append(entry);
                Ok(id)
            }
            Err(errors) => {
                debug!(%errors, "Candidate rejected");
                Err(errors)
            }
        }
    }

    /// Delete an entry by identity
    pub fn delete(&mut self, id: EntryId) -> LedgerResult<Entry> {
        let removed = self.store.delete(id)?;
        info!(%id, entry = %removed, "Entry deleted");
        Ok(removed)
    }

    /// Delete the entry shown at `row` of the visible sequence
    ///
    /// The row is resolved to an identity under the current filter before
    /// anything is removed.
    pub fn delete_visible_row(&mut self, row: usize) -> LedgerResult<Entry> {
        let id = filter::resolve_row(self.store.entries(), &self.filter, row).ok_or_else(|| {
            let len = self.visible().len();
            warn!(row, len, "Delete requested for a row outside the view");
            LedgerError::RowOutOfRange { row, len }
        })?;
        self.delete(id)
    }

    /// Change the filter selection
    pub fn set_filter(&mut self, selection: FilterSelection) {
        debug!(filter = %selection, "Filter changed");
        self.filter = selection;
    }

    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    /// Entries shown under the current filter
    pub fn visible(&self) -> Vec<&Entry> {
        filter::visible(self.store.entries(), &self.filter)
    }

    /// Sum of the visible entries' amounts
    pub fn visible_total(&self) -> Amount {
        self.visible().into_iter().map(Entry::amount).sum()
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validator::Field;

    fn candidate(description: &str, amount: &str, category: &str) -> Candidate {
        Candidate::new()
            .description(description)
            .amount(amount)
            .category(category)
    }

    fn filter_on(session: &mut LedgerSession, value: &str) {
        session.set_filter(value.parse().unwrap());
    }

    fn visible_descriptions(session: &LedgerSession) -> Vec<String> {
        session
            .visible()
            .into_iter()
            .map(|e| e.description().to_string())
            .collect()
    }

    #[test]
    fn test_submit_milk_scenario() {
        let mut session = LedgerSession::new();
        session
            .submit(&candidate("Milk", "3.5", "groceries"))
            .unwrap();

        assert_eq!(session.store().len(), 1);
        assert_eq!(session.visible().len(), 1);

        filter_on(&mut session, "groceries");
        assert_eq!(session.visible().len(), 1);

        filter_on(&mut session, "utilities");
        assert!(session.visible().is_empty());
    }

    #[test]
    fn test_rejected_submissions_leave_store_unchanged() {
        let mut session = LedgerSession::new();

        let errors = session
            .submit(&candidate("El", "20", "utilities"))
            .unwrap_err();
        assert!(errors.get(Field::Description).is_some());

        let errors = session
            .submit(&candidate("Movie", "0", "entertainment"))
            .unwrap_err();
        assert!(errors.get(Field::Amount).is_some());

        assert!(session.store().is_empty());
    }

    #[test]
    fn test_delete_from_filtered_view_removes_correct_entry() {
        let mut session = LedgerSession::new();
        session.submit(&candidate("Apples", "1", "groceries")).unwrap();
        session.submit(&candidate("Bills", "2", "utilities")).unwrap();
        session.submit(&candidate("Carrots", "3", "groceries")).unwrap();

        filter_on(&mut session, "groceries");
        assert_eq!(visible_descriptions(&session), vec!["Apples", "Carrots"]);

        let removed = session.delete_visible_row(1).unwrap();
        assert_eq!(removed.description(), "Carrots");

        let remaining: Vec<&str> = session.store().iter().map(Entry::description).collect();
        assert_eq!(remaining, vec!["Apples", "Bills"]);
    }

    #[test]
    fn test_delete_visible_row_out_of_range() {
        let mut session = LedgerSession::new();
        session.submit(&candidate("Apples", "1", "groceries")).unwrap();
        session.submit(&candidate("Bills", "2", "utilities")).unwrap();
        filter_on(&mut session, "utilities");

        let err = session.delete_visible_row(1).unwrap_err();
        assert!(matches!(err, LedgerError::RowOutOfRange { row: 1, len: 1 }));
        assert_eq!(session.store().len(), 2);
    }

    #[test]
    fn test_delete_by_identity() {
        let mut session = LedgerSession::new();
        let id = session.submit(&candidate("Rent", "900", "utilities")).unwrap();
        session.delete(id).unwrap();
        assert!(session.store().is_empty());
        assert!(session.delete(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_visible_total_follows_filter() {
        let mut session = LedgerSession::new();
        session.submit(&candidate("Apples", "1.50", "groceries")).unwrap();
        session.submit(&candidate("Power", "40", "utilities")).unwrap();

        assert_eq!(session.visible_total(), Amount::from_cents(4150));
        filter_on(&mut session, "groceries");
        assert_eq!(session.visible_total(), Amount::from_cents(150));
    }

    #[test]
    fn test_filter_survives_mutations() {
        let mut session = LedgerSession::new();
        filter_on(&mut session, "groceries");
        session.submit(&candidate("Bills", "2", "utilities")).unwrap();
        assert_eq!(session.filter().to_string(), "groceries");
        assert!(session.visible().is_empty());
    }
}
