//! Strongly-typed identity for ledger entries
//!
//! Entries are deleted by identity rather than by position, so every
//! accepted entry carries one of these.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "ent-";

/// Unique identifier of an accepted entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }
}
