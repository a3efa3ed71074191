//! Expense table view
//!
//! Shows the entries that pass the current filter, in insertion order,
//! with the visible total underneath.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Handle a key while the table has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.selected_row = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_row = app.visible_len().saturating_sub(1);
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.request_delete();
        }
        _ => {}
    }
}

/// Render the entry table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Table;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let visible = app.session.visible();
    let title = format!(
        " Expenses ({} of {}) ",
        visible.len(),
        app.session.store().len()
    );
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if visible.is_empty() {
        let text = Paragraph::new(Line::from("No expenses yet. Fill in the form to add one."))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(4),  // Row
        Constraint::Min(20),    // Description
        Constraint::Length(12), // Amount
        Constraint::Length(16), // Category
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Category").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(entry.description().to_string()),
                Cell::from(format!("{:>10}", entry.amount())).style(Style::default().fg(Color::Green)),
                Cell::from(entry.category().label()),
            ])
        })
        .collect();

    let footer = Row::new(vec![
        Cell::from(""),
        Cell::from("Total").style(bold),
        Cell::from(format!("{:>10}", app.session.visible_total()))
            .style(bold.fg(Color::Green)),
        Cell::from(app.session.filter().label()).style(Style::default().fg(Color::DarkGray)),
    ]);

    let table = Table::new(rows, widths)
        .header(header)
        .footer(footer)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if focused {
        state.select(Some(app.selected_row));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
