//! Category filter selector

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Handle a key while the filter has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            app.cycle_filter(true);
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
            app.cycle_filter(false);
        }
        _ => {}
    }
}

/// Render the filter bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Filter;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let current = app.filter_index();
    let mut spans = Vec::with_capacity(app.filter_choices.len() * 2);
    for (i, choice) in app.filter_choices.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if i == current {
            let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
            if focused {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style
            }
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(choice.label(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
