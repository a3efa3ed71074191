//! Core data models for the expense ledger
//!
//! Entries, their amounts and categories, and the identity used to delete
//! them.

pub mod amount;
pub mod category;
pub mod entry;
pub mod ids;

pub use amount::{Amount, AmountParseError};
pub use category::Category;
pub use entry::Entry;
pub use ids::EntryId;
