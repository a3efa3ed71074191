//! Custom error types for the expense ledger
//!
//! Field-level validation failures live in `services::validator`; this
//! module wraps them together with the configuration, I/O and scripting
//! failures that can escape a command.

use thiserror::Error;

use crate::services::validator::FieldErrors;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A candidate entry failed one or more field checks
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A positional index outside the sequence it addresses
    #[error("Row {row} is out of range ({len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    /// Malformed line in a batch script
    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl LedgerError {
    /// Create a "not found" error for ledger entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
