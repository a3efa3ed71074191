//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set. Otherwise the requested level applies to this
//! crate and the binary only. The TUI owns the terminal, so it logs to a
//! file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::LedgerError;

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

fn env_filter(level: LevelFilter, bin_crate: &str) -> EnvFilter {
    match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            bin_crate,
            level
        )),
    }
}

/// Initializes the tracing subscriber
///
/// `bin_crate` is the calling binary's crate name so its own events pass
/// the default filter too.
pub fn init_logger(level: LevelFilter, bin_crate: &str, target: LogTarget<'_>) -> Result<(), LedgerError> {
    let filter = env_filter(level, bin_crate);

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| LedgerError::Config(format!("Failed to install logger: {}", e)))?;
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| LedgerError::Config(format!("Failed to install logger: {}", e)))?;
        }
    }

    Ok(())
}
