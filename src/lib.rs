//! Expense Ledger - terminal expense entry with a filterable ledger
//!
//! Candidate expenses are validated field by field, accepted entries go
//! into an in-memory ledger, and a category filter narrows what is shown.
//! Nothing in the ledger outlives the process.
//!
//! # Architecture
//!
//! - `models`: Entry, Amount, Category and the entry identity
//! - `services`: validation, filtering and the ledger session
//! - `storage`: the in-memory ledger store
//! - `config`: settings and path management
//! - `display`: plain-text and JSON rendering for the CLI
//! - `cli`: non-interactive command handlers
//! - `tui`: the interactive entry form and table
//!
//! # Example
//!
//! ```rust
//! use expense_ledger::services::{Candidate, LedgerSession};
//!
//! let mut session = LedgerSession::new();
//! session
//!     .submit(&Candidate::new().description("Milk").amount("3.50").category("groceries"))
//!     .unwrap();
//! assert_eq!(session.visible_total().to_string(), "3.50");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
