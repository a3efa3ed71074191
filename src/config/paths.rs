//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_HOME` environment variable (if set)
//! 2. The platform config directory for `expense-ledger`
//!    (`~/.config/expense-ledger` on Linux)
//!
//! Only settings and the TUI log live here; ledger entries are never
//! written to disk.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable overriding the base directory
pub const HOME_ENV: &str = "EXPENSE_LEDGER_HOME";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(HOME_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the TUI log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("ledger.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "expense-ledger")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Config("Could not determine a home directory".into()))
}
