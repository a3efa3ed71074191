//! CLI command handlers
//!
//! This module bridges the clap argument parsing with the service layer.

pub mod batch;
pub mod check;

pub use batch::{handle_batch_command, BatchArgs};
pub use check::{handle_check_command, CheckArgs};
