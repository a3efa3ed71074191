//! Delete confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Handle a key while the confirmation is open
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            app.set_status("Delete cancelled");
        }
        _ => {}
    }
}

/// Render the confirmation over the current screen
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(54, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Expense ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Green)),
            Span::raw(" Delete  "),
            Span::styled("[n/Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Keep"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
