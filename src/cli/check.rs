//! One-shot validation command
//!
//! Runs a single candidate through the validator without keeping it.

use clap::Args;

use crate::display::format_field_errors;
use crate::error::{LedgerError, LedgerResult};
use crate::services::{validate, Candidate};

/// Arguments for `ledger check`
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Entry description (at least 3 characters)
    #[arg(short, long)]
    pub description: Option<String>,
    /// Amount, e.g. "3.50" (at least 0.1)
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,
    /// Category, e.g. "groceries"
    #[arg(short, long)]
    pub category: Option<String>,
}

impl CheckArgs {
    fn candidate(&self) -> Candidate {
        Candidate {
            description: self.description.clone(),
            amount: self.amount.clone(),
            category: self.category.clone(),
        }
    }
}

/// Handle `ledger check`
pub fn handle_check_command(args: CheckArgs) -> LedgerResult<()> {
    match validate(&args.candidate()) {
        Ok(entry) => {
            println!("Accepted: {}", entry);
            Ok(())
        }
        Err(errors) => {
            print!("Rejected:\n{}", format_field_errors(&errors));
            Err(LedgerError::Validation(errors))
        }
    }
}
