//! Entry model
//!
//! An accepted expense record. Entries are only ever built by the
//! validator, so every `Entry` in existence satisfies the field rules.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::amount::Amount;
use super::category::Category;
use super::ids::EntryId;

/// A validated expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    id: EntryId,
    description: String,
    amount: Amount,
    category: Category,
    created_at: DateTime<Utc>,
}

impl Entry {
    /// Assemble an entry from already-checked parts
    pub(crate) fn new(description: String, amount: Amount, category: Category) -> Self {
        Self {
            id: EntryId::new(),
            description,
            amount,
            category,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// When the entry was accepted
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.description, self.amount, self.category)
    }
}
