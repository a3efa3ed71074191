//! Filter view over the ledger
//!
//! Derives the visible sequence from the store and the current selection.
//! Nothing is cached; callers recompute on every render.

use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Entry, EntryId};

/// Which entries are shown
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterSelection {
    /// Every entry
    #[default]
    All,
    /// Only entries in this category
    Category(Category),
}

impl FilterSelection {
    /// Whether an entry is part of the visible sequence
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => entry.category() == category,
        }
    }

    /// Label for selectors, e.g. "All Categories" or "Groceries"
    pub fn label(&self) -> String {
        match self {
            Self::All => "All Categories".to_string(),
            Self::Category(category) => category.label(),
        }
    }

    /// The selector choices: `All` followed by each category
    pub fn choices(categories: &[Category]) -> Vec<FilterSelection> {
        std::iter::once(Self::All)
            .chain(categories.iter().cloned().map(Self::Category))
            .collect()
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(category) => write!(f, "{}", category),
        }
    }
}

impl From<Category> for FilterSelection {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl FromStr for FilterSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("all-categories") {
            return Ok(Self::All);
        }
        Category::parse(trimmed)
            .map(Self::Category)
            .ok_or_else(|| "Filter must be 'all' or a category".to_string())
    }
}

/// Entries shown under `selection`, in store order
pub fn visible<'a>(entries: &'a [Entry], selection: &FilterSelection) -> Vec<&'a Entry> {
    entries.iter().filter(|e| selection.matches(e)).collect()
}

/// Store indices of the visible entries, in store order
pub fn visible_positions(entries: &[Entry], selection: &FilterSelection) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| selection.matches(e))
        .map(|(i, _)| i)
        .collect()
}

/// Identity of the entry rendered at visible `row`
pub fn resolve_row(entries: &[Entry], selection: &FilterSelection, row: usize) -> Option<EntryId> {
    entries
        .iter()
        .filter(|e| selection.matches(e))
        .nth(row)
        .map(Entry::id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validator::{validate, Candidate};

    fn entry(description: &str, category: &str) -> Entry {
        validate(
            &Candidate::new()
                .description(description)
                .amount("2")
                .category(category),
        )
        .unwrap()
    }

    fn groceries() -> FilterSelection {
        "groceries".parse().unwrap()
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("Apples", "groceries"),
            entry("Bills", "utilities"),
            entry("Carrots", "groceries"),
            entry("Cinema", "entertainment"),
        ]
    }

    #[test]
    fn test_all_returns_full_sequence() {
        let entries = sample();
        let shown = visible(&entries, &FilterSelection::All);
        assert_eq!(shown.len(), entries.len());
        assert!(shown.iter().zip(&entries).all(|(a, b)| a.id() == b.id()));
    }

    #[test]
    fn test_category_returns_ordered_subsequence() {
        let entries = sample();
        let shown: Vec<&str> = visible(&entries, &groceries())
            .into_iter()
            .map(Entry::description)
            .collect();
        assert_eq!(shown, vec!["Apples", "Carrots"]);
    }

    #[test]
    fn test_category_without_entries() {
        let entries = vec![entry("Milk", "groceries")];
        let utilities: FilterSelection = "utilities".parse().unwrap();
        assert!(visible(&entries, &utilities).is_empty());
        assert_eq!(visible(&entries, &groceries()).len(), 1);
        assert_eq!(visible(&entries, &FilterSelection::All).len(), 1);
    }

    #[test]
    fn test_visible_positions() {
        let entries = sample();
        assert_eq!(visible_positions(&entries, &groceries()), vec![0, 2]);
        assert_eq!(
            visible_positions(&entries, &FilterSelection::All),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_resolve_row_maps_to_underlying_entry() {
        let entries = sample();
        assert_eq!(resolve_row(&entries, &groceries(), 1), Some(entries[2].id()));
        assert_eq!(resolve_row(&entries, &groceries(), 2), None);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!("all".parse::<FilterSelection>().unwrap(), FilterSelection::All);
        assert_eq!(
            "all-categories".parse::<FilterSelection>().unwrap(),
            FilterSelection::All
        );
        assert_eq!(groceries().to_string(), "groceries");
        assert!("  ".parse::<FilterSelection>().is_err());
    }

    #[test]
    fn test_choices_and_labels() {
        let categories = vec![
            Category::parse("groceries").unwrap(),
            Category::parse("utilities").unwrap(),
        ];
        let labels: Vec<String> = FilterSelection::choices(&categories)
            .iter()
            .map(FilterSelection::label)
            .collect();
        assert_eq!(labels, vec!["All Categories", "Groceries", "Utilities"]);
    }
}
