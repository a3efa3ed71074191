//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the focused element.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::trace;

use super::app::{ActiveDialog, App, Focus};
use super::dialogs;
use super::event::Event;
use super::views::{entry_form, entry_table, filter_bar};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    trace!(code = ?key.code, modifiers = ?key.modifiers, focus = ?app.focus, "key");

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Esc if app.focus.is_text_input() => {
            app.set_focus(Focus::Table);
            return Ok(());
        }
        _ => {}
    }

    // Outside text fields, printable shortcuts are global
    if !app.focus.is_text_input() {
        match key.code {
            KeyCode::Char('q') => {
                app.quit();
                return Ok(());
            }
            KeyCode::Char('?') => {
                app.open_dialog(ActiveDialog::Help);
                return Ok(());
            }
            _ => {}
        }
    }

    match app.focus {
        Focus::Description | Focus::Amount | Focus::Category | Focus::Submit => {
            entry_form::handle_key(app, key)
        }
        Focus::Filter => filter_bar::handle_key(app, key),
        Focus::Table => entry_table::handle_key(app, key),
    }

    Ok(())
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ConfirmDelete(_) => dialogs::confirm::handle_key(app, key),
        ActiveDialog::None => {}
    }
}
