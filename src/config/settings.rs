//! User settings for the expense ledger
//!
//! Holds the category choices offered by the form and the TUI tick rate.
//! Settings are the only thing the program ever writes to disk.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::Category;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Category values offered by the form and the filter, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// How often the TUI event loop wakes up without input, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_categories() -> Vec<String> {
    vec![
        "groceries".to_string(),
        "utilities".to_string(),
        "entertainment".to_string(),
    ]
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            categories: default_categories(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check the category list is usable
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.categories.is_empty() {
            return Err(LedgerError::Config(
                "At least one category must be configured".into(),
            ));
        }

        let mut seen = HashSet::new();
        for raw in &self.categories {
            let category = Category::parse(raw)
                .ok_or_else(|| LedgerError::Config("Category names cannot be blank".into()))?;
            if !seen.insert(category) {
                return Err(LedgerError::Config(format!(
                    "Category '{}' is listed more than once",
                    raw.trim()
                )));
            }
        }

        Ok(())
    }

    /// Configured categories, skipping blank names
    pub fn category_options(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter_map(|raw| Category::parse(raw))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(
            settings.categories,
            vec!["groceries", "utilities", "entertainment"]
        );
        assert_eq!(settings.tick_rate_ms, 250);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.categories.push("travel".into());
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.categories.last().map(String::as_str), Some("travel"));
        assert_eq!(loaded.category_options().len(), 4);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"tick_rate_ms": 100}"#).unwrap();
        assert_eq!(settings.tick_rate_ms, 100);
        assert_eq!(settings.categories.len(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_categories() {
        let mut settings = Settings::default();
        settings.categories.clear();
        assert!(settings.validate().is_err());

        settings.categories = vec!["food".into(), "  ".into()];
        assert!(settings.validate().is_err());

        settings.categories = vec!["food".into(), " food ".into()];
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"categories": []}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
