//! Terminal User Interface module
//!
//! One screen built with ratatui: an entry form, a category filter, and
//! the expense table, plus help and delete-confirmation dialogs.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
