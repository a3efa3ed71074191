use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use expense_ledger::cli::{handle_batch_command, handle_check_command, BatchArgs, CheckArgs};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::logging::{init_logger, LogTarget};
use expense_ledger::LedgerError;

const BIN_CRATE: &str = env!("CARGO_CRATE_NAME");

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal expense entry with a filterable in-memory ledger",
    long_about = "Record expenses through a validated form, filter them by \
                  category, and delete the ones you no longer want. The \
                  ledger lives only for the current session."
)]
struct Cli {
    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", env = "EXPENSE_LEDGER_LOG")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Validate a single candidate expense
    Check(CheckArgs),

    /// Run a scripted session from a file or stdin
    Batch(BatchArgs),

    /// Show configuration paths and settings
    Config,

    /// Write the default settings file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = cli.log_level;
    let command = cli.command.unwrap_or(Commands::Tui);

    if matches!(command, Commands::Tui) && !std::io::stdout().is_terminal() {
        return Err(LedgerError::Tui(
            "stdout is not a terminal; use `ledger batch` for scripted input".into(),
        )
        .into());
    }

    // check and batch never read settings, so they skip path resolution
    match command {
        Commands::Check(args) => {
            init_logger(level, BIN_CRATE, LogTarget::Stderr)?;
            handle_check_command(args)?;
        }
        Commands::Batch(args) => {
            init_logger(level, BIN_CRATE, LogTarget::Stderr)?;
            handle_batch_command(args)?;
        }
        Commands::Tui => {
            let paths = LedgerPaths::new()?;
            init_logger(level, BIN_CRATE, LogTarget::File(&paths.log_file()))?;
            debug!(base_dir = %paths.base_dir().display(), "Resolved paths");
            let settings = Settings::load_or_create(&paths)?;
            expense_ledger::tui::run_tui(&settings)?;
        }
        Commands::Config => {
            let paths = LedgerPaths::new()?;
            init_logger(level, BIN_CRATE, LogTarget::Stderr)?;
            let settings = Settings::load_or_create(&paths)?;
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Categories: {}", settings.categories.join(", "));
            println!("  Tick rate:  {} ms", settings.tick_rate_ms);
        }
        Commands::Init => {
            let paths = LedgerPaths::new()?;
            init_logger(level, BIN_CRATE, LogTarget::Stderr)?;
            let settings = Settings::load_or_create(&paths)?;
            settings.save(&paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
            println!("Categories: {}", settings.categories.join(", "));
        }
    }

    Ok(())
}
