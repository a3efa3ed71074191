//! Status bar view
//!
//! Shows the visible total, the last status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Total: ", Style::default().fg(Color::White)),
        Span::styled(
            app.session.visible_total().to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(app.session.filter().label(), Style::default().fg(Color::Cyan)),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.focus {
        Focus::Table => " [d]Delete [Tab]Next [?]Help [q]Quit",
        Focus::Filter | Focus::Category => " [←/→]Change [Tab]Next [?]Help [q]Quit",
        Focus::Submit => " [Enter]Submit [Tab]Next [?]Help [q]Quit",
        Focus::Description | Focus::Amount => " [Enter]Submit [Tab]Next [Esc]Table [F1]Help",
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
