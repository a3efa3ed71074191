//! Scripted session command
//!
//! Drives an in-memory session from a line-based script, one command per
//! line:
//!
//! ```text
//! # comments and blank lines are ignored
//! add Milk | 3.5 | groceries
//! filter groceries
//! delete 1
//! list
//! ```
//!
//! The whole script is parsed before anything runs. Rejected entries and
//! rows missing from the current view are reported and the script carries
//! on; nothing survives the run.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::display::{format_entries_json, format_entry_table, format_field_errors, format_total_line};
use crate::error::{LedgerError, LedgerResult};
use crate::services::{Candidate, FilterSelection, LedgerSession};

/// Arguments for `ledger batch`
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Script file (reads stdin when omitted)
    pub file: Option<PathBuf>,
    /// Print `list` output as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add(Candidate),
    Filter(FilterSelection),
    /// Zero-based row of the visible sequence
    Delete(usize),
    List,
}

/// Parse a single line; `None` for blank lines and comments
pub fn parse_line(line_no: usize, line: &str) -> LedgerResult<Option<ScriptCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let script_error = |message: String| LedgerError::Script {
        line: line_no,
        message,
    };

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword {
        "add" => {
            let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
            if parts.len() > 3 {
                return Err(script_error(
                    "add takes at most three fields: description | amount | category".into(),
                ));
            }
            let field = |i: usize| {
                parts
                    .get(i)
                    .filter(|part| !part.is_empty())
                    .map(|part| part.to_string())
            };
            ScriptCommand::Add(Candidate {
                description: field(0),
                amount: field(1),
                category: field(2),
            })
        }
        "filter" => ScriptCommand::Filter(rest.parse().map_err(script_error)?),
        "delete" => {
            let row: usize = rest
                .parse()
                .ok()
                .filter(|row| *row >= 1)
                .ok_or_else(|| script_error(format!("'{}' is not a row number", rest)))?;
            ScriptCommand::Delete(row - 1)
        }
        "list" if rest.is_empty() => ScriptCommand::List,
        "list" => return Err(script_error("list takes no arguments".into())),
        other => return Err(script_error(format!("Unknown command '{}'", other))),
    };

    Ok(Some(command))
}

/// Parse every line of a script, keeping 1-based line numbers
pub fn parse_script(script: &str) -> LedgerResult<Vec<(usize, ScriptCommand)>> {
    let mut commands = Vec::new();
    for (i, line) in script.lines().enumerate() {
        if let Some(command) = parse_line(i + 1, line)? {
            commands.push((i + 1, command));
        }
    }
    Ok(commands)
}

/// Run a script against a fresh session, writing results to `out`
pub fn run_script<W: Write>(script: &str, json: bool, out: &mut W) -> LedgerResult<LedgerSession> {
    let commands = parse_script(script)?;
    let mut session = LedgerSession::new();

    for (line_no, command) in commands {
        debug!(line = line_no, ?command, "Running script command");
        match command {
            ScriptCommand::Add(candidate) => match session.submit(&candidate) {
                Ok(id) => {
                    if let Some(entry) = session.store().position(id).and_then(|i| session.store().get(i)) {
                        writeln!(out, "added: {}", entry)?;
                    }
                }
                Err(errors) => {
                    write!(out, "line {}: rejected\n{}", line_no, format_field_errors(&errors))?;
                }
            },
            ScriptCommand::Filter(selection) => {
                writeln!(out, "filter: {}", selection.label())?;
                session.set_filter(selection);
            }
            ScriptCommand::Delete(row) => match session.delete_visible_row(row) {
                Ok(entry) => writeln!(out, "deleted: {}", entry)?,
                Err(LedgerError::RowOutOfRange { len, .. }) => writeln!(
                    out,
                    "line {}: no row {} in the current view ({} rows)",
                    line_no,
                    row + 1,
                    len
                )?,
                Err(err) => return Err(err),
            },
            ScriptCommand::List => {
                let visible = session.visible();
                if json {
                    writeln!(out, "{}", format_entries_json(&visible)?)?;
                } else {
                    write!(out, "{}", format_entry_table(&visible))?;
                    write!(
                        out,
                        "{}",
                        format_total_line(
                            &visible,
                            session.visible_total(),
                            session.store().len(),
                            session.filter()
                        )
                    )?;
                }
            }
        }
    }

    Ok(session)
}

/// Handle `ledger batch`
pub fn handle_batch_command(args: BatchArgs) -> LedgerResult<()> {
    let script = match &args.file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Io(format!("Failed to read script {}: {}", path.display(), e))
        })?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&script, args.json, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    fn run(script: &str) -> (LedgerSession, String) {
        let mut out = Vec::new();
        let session = run_script(script, false, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    fn stored(session: &LedgerSession) -> Vec<&str> {
        session.store().iter().map(Entry::description).collect()
    }

    #[test]
    fn test_parse_add_with_missing_fields() {
        let command = parse_line(1, "add Milk |  | groceries").unwrap().unwrap();
        assert_eq!(
            command,
            ScriptCommand::Add(Candidate {
                description: Some("Milk".into()),
                amount: None,
                category: Some("groceries".into()),
            })
        );

        let command = parse_line(1, "add Milk").unwrap().unwrap();
        assert_eq!(
            command,
            ScriptCommand::Add(Candidate::new().description("Milk"))
        );
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_line(1, "   ").unwrap(), None);
        assert_eq!(parse_line(2, "# note").unwrap(), None);
    }

    #[test]
    fn test_parse_errors_carry_line_number() {
        let err = parse_script("list\nfrobnicate now").unwrap_err();
        assert!(matches!(err, LedgerError::Script { line: 2, .. }));

        assert!(parse_line(1, "delete 0").is_err());
        assert!(parse_line(1, "delete x").is_err());
        assert!(parse_line(1, "filter").is_err());
        assert!(parse_line(1, "list everything").is_err());
        assert!(parse_line(1, "add a | b | c | d").is_err());
    }

    #[test]
    fn test_parse_error_runs_nothing() {
        let mut out = Vec::new();
        let result = run_script("add Milk | 3.5 | groceries\nbogus", false, &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_rejections_are_reported_and_skipped() {
        let (session, output) = run(
            "add El | 20 | utilities\n\
             add Movie | 0 | entertainment\n\
             add Milk | 3.5 | groceries\n",
        );
        assert_eq!(stored(&session), vec!["Milk"]);
        assert!(output.contains("line 1: rejected\n  description: Description must contain at least 3 characters"));
        assert!(output.contains("line 2: rejected\n  amount: Amount must be greater than or equal to 0.1"));
        assert!(output.contains("added: Milk 3.50 (groceries)"));
    }

    #[test]
    fn test_delete_uses_filtered_row() {
        let (session, output) = run(
            "add Apples | 1 | groceries\n\
             add Bills | 2 | utilities\n\
             add Carrots | 3 | groceries\n\
             filter groceries\n\
             delete 2\n",
        );
        assert_eq!(stored(&session), vec!["Apples", "Bills"]);
        assert!(output.contains("deleted: Carrots 3.00 (groceries)"));
    }

    #[test]
    fn test_huge_amounts_are_capped_and_total_stays_positive() {
        let (session, output) = run(
            "add Yacht | 92233720368547758 | groceries\n\
             add Plane | 1000000000 | groceries\n\
             add Island | 1000000000 | groceries\n\
             list\n",
        );
        assert_eq!(stored(&session), vec!["Plane", "Island"]);
        assert!(output.contains("line 1: rejected\n  amount: Amount must be less than or equal to 1000000000.00"));
        assert!(output.contains("Total: 2000000000.00 (2 of 2 entries, All Categories)"));
    }

    #[test]
    fn test_delete_missing_row_is_reported() {
        let (session, output) = run("add Apples | 1 | groceries\ndelete 3\n");
        assert_eq!(session.store().len(), 1);
        assert!(output.contains("line 2: no row 3 in the current view (1 rows)"));
    }

    #[test]
    fn test_list_prints_table_and_total() {
        let (_, output) = run(
            "add Milk | 3.5 | groceries\n\
             add Power | 40 | utilities\n\
             filter utilities\n\
             list\n",
        );
        assert!(output.contains("Power"));
        assert!(output.contains("Total: 40.00 (1 of 2 entries, Utilities)"));
    }

    #[test]
    fn test_list_json() {
        let mut out = Vec::new();
        run_script("add Milk | 3.5 | groceries\nlist\n", true, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let json_start = output.find('[').unwrap();
        let value: serde_json::Value = serde_json::from_str(&output[json_start..]).unwrap();
        assert_eq!(value[0]["category"], "groceries");
    }
}
