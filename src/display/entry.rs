//! Entry display formatting
//!
//! Renders the visible sequence for the command line: a table with a total
//! line, or JSON.

use tabled::{settings::Style, Table, Tabled};

use crate::error::LedgerResult;
use crate::models::{Amount, Entry};
use crate::services::{FieldErrors, FilterSelection};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: Amount,
    #[tabled(rename = "Category")]
    category: String,
}

/// Format visible entries as a table, numbering rows from 1
pub fn format_entry_table(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "No entries.\n".to_string();
    }

    let rows = entries.iter().enumerate().map(|(i, entry)| EntryRow {
        row: i + 1,
        description: entry.description().to_string(),
        amount: entry.amount(),
        category: entry.category().to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Summary line under the table
pub fn format_total_line(
    entries: &[&Entry],
    total: Amount,
    ledger_len: usize,
    filter: &FilterSelection,
) -> String {
    format!(
        "Total: {} ({} of {} entries, {})\n",
        total,
        entries.len(),
        ledger_len,
        filter.label()
    )
}

/// Visible entries as a JSON array
pub fn format_entries_json(entries: &[&Entry]) -> LedgerResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// One indented line per failed field
pub fn format_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, err)| format!("  {}: {}\n", field, err))
        .collect()
}
