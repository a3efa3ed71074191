//! Entry form panel
//!
//! Description and amount text fields, a category selector, and a submit
//! button. Validation runs on every render and every keystroke; a field's
//! error shows once the field has been touched, and the submit button
//! stays disabled while any field fails.

use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::{check, Candidate, Field, FieldErrors};
use crate::tui::app::{App, Focus};
use crate::tui::widgets::input::TextInput;

const CATEGORY_PLACEHOLDER: &str = "Select category";

/// State for the entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Description input
    pub description_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Index into the category choices; `None` shows the placeholder
    pub category_index: Option<usize>,

    /// Fields whose errors are revealed
    touched: BTreeSet<Field>,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    /// Create a blank form
    pub fn new() -> Self {
        Self {
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it?"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            category_index: None,
            touched: BTreeSet::new(),
        }
    }

    /// Clear every field and hide all errors
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Mirror the app focus onto the text inputs
    pub fn sync_focus(&mut self, focus: Focus) {
        self.description_input.focused = focus == Focus::Description;
        self.amount_input.focused = focus == Focus::Amount;
    }

    /// The chosen category, if any
    pub fn selected_category<'c>(&self, categories: &'c [Category]) -> Option<&'c Category> {
        self.category_index.and_then(|i| categories.get(i))
    }

    /// Step through placeholder + categories, wrapping around
    pub fn cycle_category(&mut self, forward: bool, count: usize) {
        if count == 0 {
            self.category_index = None;
            return;
        }
        self.category_index = match (self.category_index, forward) {
            (None, true) => Some(0),
            (None, false) => Some(count - 1),
            (Some(i), true) if i + 1 < count => Some(i + 1),
            (Some(i), false) if i > 0 => Some(i - 1),
            (Some(_), _) => None,
        };
        self.touch(Field::Category);
    }

    /// Raw candidate built from the current field values
    pub fn candidate(&self, categories: &[Category]) -> Candidate {
        let text = |input: &TextInput| {
            if input.is_empty() {
                None
            } else {
                Some(input.value().to_string())
            }
        };
        Candidate {
            description: text(&self.description_input),
            amount: text(&self.amount_input),
            category: self
                .selected_category(categories)
                .map(|c| c.as_str().to_string()),
        }
    }

    /// Current error map
    pub fn errors(&self, categories: &[Category]) -> FieldErrors {
        check(&self.candidate(categories))
    }

    /// Whether submitting now would be accepted
    pub fn is_valid(&self, categories: &[Category]) -> bool {
        self.errors(categories).is_empty()
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error message to show next to `field`, if any
    pub fn visible_error(&self, field: Field, categories: &[Category]) -> Option<String> {
        if self.is_touched(field) {
            self.errors(categories).message(field)
        } else {
            None
        }
    }

    fn focused_input(&mut self, focus: Focus) -> Option<(&mut TextInput, Field)> {
        match focus {
            Focus::Description => Some((&mut self.description_input, Field::Description)),
            Focus::Amount => Some((&mut self.amount_input, Field::Amount)),
            _ => None,
        }
    }
}

/// Handle a key while the form has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let focus = app.focus;

    if key.code == KeyCode::Enter {
        app.submit_form();
        return;
    }

    match focus {
        Focus::Description | Focus::Amount => {
            let Some((input, field)) = app.form.focused_input(focus) else {
                return;
            };
            let edited = match key.code {
                KeyCode::Char(c) => {
                    input.insert(c);
                    true
                }
                KeyCode::Backspace => {
                    input.backspace();
                    true
                }
                KeyCode::Delete => {
                    input.delete();
                    true
                }
                KeyCode::Left => {
                    input.move_left();
                    false
                }
                KeyCode::Right => {
                    input.move_right();
                    false
                }
                KeyCode::Home => {
                    input.move_start();
                    false
                }
                KeyCode::End => {
                    input.move_end();
                    false
                }
                _ => false,
            };
            if edited {
                app.form.touch(field);
                app.clear_status();
            }
        }
        Focus::Category => match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
                app.form.cycle_category(true, app.categories.len());
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
                app.form.cycle_category(false, app.categories.len());
            }
            KeyCode::Backspace | KeyCode::Delete => {
                app.form.category_index = None;
                app.form.touch(Field::Category);
            }
            _ => {}
        },
        Focus::Submit => {
            if key.code == KeyCode::Char(' ') {
                app.submit_form();
            }
        }
        Focus::Filter | Focus::Table => {}
    }
}

/// Render the form panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focus.in_form() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" New Expense ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Description error
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Amount error
            Constraint::Length(1), // Category
            Constraint::Length(1), // Category error
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.form;
    let categories = &app.categories;

    frame.render_widget(&form.description_input, rows[0]);
    render_error(frame, rows[1], form.visible_error(Field::Description, categories));

    frame.render_widget(&form.amount_input, rows[2]);
    render_error(frame, rows[3], form.visible_error(Field::Amount, categories));

    render_category(frame, rows[4], form, categories, app.focus == Focus::Category);
    render_error(frame, rows[5], form.visible_error(Field::Category, categories));

    render_submit(
        frame,
        rows[6],
        form.is_valid(categories),
        app.focus == Focus::Submit,
    );
}

fn render_error(frame: &mut Frame, area: Rect, message: Option<String>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_category(
    frame: &mut Frame,
    area: Rect,
    form: &EntryFormState,
    categories: &[Category],
    focused: bool,
) {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let (value, value_style) = match form.selected_category(categories) {
        Some(category) => (category.label(), Style::default().fg(Color::Yellow)),
        None => (
            CATEGORY_PLACEHOLDER.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let value_style = if focused {
        value_style.add_modifier(Modifier::REVERSED)
    } else {
        value_style
    };

    let line = Line::from(vec![
        Span::styled("Category", label_style),
        Span::raw(": "),
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(value, value_style),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_submit(frame: &mut Frame, area: Rect, enabled: bool, focused: bool) {
    let mut style = if enabled {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let line = Line::from(vec![
        Span::styled("[ Submit ]", style),
        Span::raw("  "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Save  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FieldError;

    fn categories() -> Vec<Category> {
        ["groceries", "utilities", "entertainment"]
            .iter()
            .filter_map(|c| Category::parse(c))
            .collect()
    }

    #[test]
    fn test_blank_form_is_invalid_but_quiet() {
        let form = EntryFormState::new();
        let cats = categories();
        assert!(!form.is_valid(&cats));
        for field in Field::ALL {
            assert!(form.visible_error(field, &cats).is_none());
        }
    }

    #[test]
    fn test_touching_reveals_errors() {
        let mut form = EntryFormState::new();
        let cats = categories();
        form.description_input.insert('E');
        form.touch(Field::Description);

        assert_eq!(
            form.visible_error(Field::Description, &cats).unwrap(),
            "Description must contain at least 3 characters"
        );
        assert!(form.visible_error(Field::Amount, &cats).is_none());

        form.touch_all();
        assert_eq!(
            form.errors(&cats).get(Field::Amount),
            Some(FieldError::MissingOrNotNumeric)
        );
        assert!(form.visible_error(Field::Category, &cats).is_some());
    }

    #[test]
    fn test_candidate_from_fields() {
        let mut form = EntryFormState::new();
        let cats = categories();
        form.description_input = form.description_input.clone().content("Movie");
        form.amount_input = form.amount_input.clone().content("12");
        form.category_index = Some(2);

        let candidate = form.candidate(&cats);
        assert_eq!(candidate.category.as_deref(), Some("entertainment"));
        assert!(form.is_valid(&cats));
    }

    #[test]
    fn test_cycle_category_passes_through_placeholder() {
        let mut form = EntryFormState::new();
        form.cycle_category(true, 3);
        assert_eq!(form.category_index, Some(0));
        form.cycle_category(false, 3);
        assert_eq!(form.category_index, None);
        form.cycle_category(false, 3);
        assert_eq!(form.category_index, Some(2));
        form.cycle_category(true, 3);
        assert_eq!(form.category_index, None);
        assert!(form.is_touched(Field::Category));
    }

    #[test]
    fn test_reset_clears_touched() {
        let mut form = EntryFormState::new();
        form.touch_all();
        form.amount_input.insert('5');
        form.reset();
        assert!(form.amount_input.is_empty());
        assert!(!form.is_touched(Field::Amount));
    }
}
