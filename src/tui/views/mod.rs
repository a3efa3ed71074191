//! TUI Views module
//!
//! The single screen: entry form and filter on top, the expense table
//! below, and a status bar along the bottom.

pub mod entry_form;
pub mod entry_table;
pub mod filter_bar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    entry_form::render(frame, app, layout.form);
    filter_bar::render(frame, app, layout.filter);
    entry_table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmDelete(id) => {
            let store = app.session.store();
            let message = match store.position(*id).and_then(|i| store.get(i)) {
                Some(entry) => format!("Delete \"{}\" ({})?", entry.description(), entry.amount()),
                None => "Delete this expense?".to_string(),
            };
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::None => {}
    }
}
