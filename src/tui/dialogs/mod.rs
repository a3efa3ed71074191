//! Modal dialogs drawn over the main screen

pub mod confirm;
pub mod help;
