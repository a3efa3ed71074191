//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The ledger itself lives in the owned [`LedgerSession`]; everything else
//! here is presentation state.

use tracing::warn;

use crate::config::settings::Settings;
use crate::models::{Category, EntryId};
use crate::services::filter::resolve_row;
use crate::services::{FilterSelection, LedgerSession};

use super::views::entry_form::EntryFormState;

/// Which element has keyboard focus, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Description,
    Amount,
    Category,
    Submit,
    Filter,
    Table,
}

impl Focus {
    /// Get the next element (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Submit,
            Self::Submit => Self::Filter,
            Self::Filter => Self::Table,
            Self::Table => Self::Description,
        }
    }

    /// Get the previous element (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Table,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
            Self::Submit => Self::Category,
            Self::Filter => Self::Submit,
            Self::Table => Self::Filter,
        }
    }

    /// Whether typed characters go into a text field
    pub fn is_text_input(self) -> bool {
        matches!(self, Self::Description | Self::Amount)
    }

    /// Whether the focus is inside the entry form
    pub fn in_form(self) -> bool {
        matches!(
            self,
            Self::Description | Self::Amount | Self::Category | Self::Submit
        )
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Delete confirmation for the captured entry
    ConfirmDelete(EntryId),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The ledger and its filter
    pub session: LedgerSession,

    /// Category choices offered by the form
    pub categories: Vec<Category>,

    /// Filter choices: "All Categories" followed by each category
    pub filter_choices: Vec<FilterSelection>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused element
    pub focus: Focus,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Entry form state
    pub form: EntryFormState,

    /// Selected row in the visible table
    pub selected_row: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance with an empty ledger
    pub fn new(settings: &'a Settings) -> Self {
        let categories = settings.category_options();
        let filter_choices = FilterSelection::choices(&categories);
        let mut app = Self {
            settings,
            session: LedgerSession::new(),
            categories,
            filter_choices,
            should_quit: false,
            focus: Focus::default(),
            active_dialog: ActiveDialog::default(),
            form: EntryFormState::new(),
            selected_row: 0,
            status_message: None,
        };
        app.set_focus(Focus::Description);
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Move focus, keeping the form's input cursors in sync
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.form.sync_focus(focus);
        if focus == Focus::Table {
            self.clamp_selection();
        }
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Number of rows in the visible table
    pub fn visible_len(&self) -> usize {
        self.session.visible().len()
    }

    /// Move table selection up
    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move table selection down
    pub fn move_down(&mut self) {
        if self.selected_row + 1 < self.visible_len() {
            self.selected_row += 1;
        }
    }

    /// Keep the selected row inside the visible table
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.selected_row >= len {
            self.selected_row = len.saturating_sub(1);
        }
    }

    /// Identity of the entry under the table selection
    pub fn selected_entry_id(&self) -> Option<EntryId> {
        resolve_row(
            self.session.store().entries(),
            self.session.filter(),
            self.selected_row,
        )
    }

    /// Index of the current filter within `filter_choices`
    pub fn filter_index(&self) -> usize {
        self.filter_choices
            .iter()
            .position(|choice| choice == self.session.filter())
            .unwrap_or(0)
    }

    /// Step the filter selection forwards or backwards, wrapping around
    pub fn cycle_filter(&mut self, forward: bool) {
        let len = self.filter_choices.len();
        if len == 0 {
            return;
        }
        let current = self.filter_index();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        let selection = self.filter_choices[next].clone();
        self.session.set_filter(selection);
        self.selected_row = 0;
    }

    /// Submit the form: append on success, otherwise reveal every error
    pub fn submit_form(&mut self) {
        let candidate = self.form.candidate(&self.categories);
        match self.session.submit(&candidate) {
            Ok(_) => {
                let message = format!(
                    "Added {}",
                    self.session
                        .store()
                        .entries()
                        .last()
                        .map(|e| e.to_string())
                        .unwrap_or_default()
                );
                self.form.reset();
                self.set_focus(Focus::Description);
                self.clamp_selection();
                self.set_status(message);
            }
            Err(errors) => {
                self.form.touch_all();
                self.set_status(format!(
                    "Fix {} field{} before submitting",
                    errors.len(),
                    if errors.len() == 1 { "" } else { "s" }
                ));
            }
        }
    }

    /// Ask for confirmation before deleting the selected entry
    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected_entry_id() {
            self.open_dialog(ActiveDialog::ConfirmDelete(id));
        }
    }

    /// Delete the entry captured by the confirmation dialog
    pub fn confirm_delete(&mut self) {
        let ActiveDialog::ConfirmDelete(id) = self.active_dialog.clone() else {
            return;
        };
        self.close_dialog();
        match self.session.delete(id) {
            Ok(entry) => self.set_status(format!("Deleted {}", entry)),
            Err(err) => {
                warn!(%err, "Delete failed");
                self.set_status(err.to_string());
            }
        }
        self.clamp_selection();
    }
}
