//! Business logic layer
//!
//! Validation, the filter view, and the session that ties them to the
//! in-memory store.

pub mod filter;
pub mod session;
pub mod validator;

pub use filter::FilterSelection;
pub use session::LedgerSession;
pub use validator::{check, validate, Candidate, Field, FieldError, FieldErrors};
