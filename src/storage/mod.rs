//! Storage layer
//!
//! The ledger lives in process memory only and is dropped with the
//! session.

pub mod ledger;

pub use ledger::LedgerStore;
