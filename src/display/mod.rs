//! Display formatting for command-line output

pub mod entry;

pub use entry::{format_entries_json, format_entry_table, format_field_errors, format_total_line};
