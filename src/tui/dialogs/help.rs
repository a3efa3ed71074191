//! Help dialog
//!
//! Lists keyboard shortcuts grouped by the element that has focus

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Anywhere",
        &[
            ("Tab/S-Tab", "Next / previous element"),
            ("?/F1", "Show this help"),
            ("q", "Quit (outside text fields)"),
            ("Ctrl+C/Q", "Quit"),
        ],
    ),
    (
        "Entry Form",
        &[
            ("Enter", "Submit the expense"),
            ("←/→", "Move cursor / change category"),
            ("Esc", "Jump to the table"),
        ],
    ),
    (
        "Filter",
        &[("←/→ h/l", "Previous / next category")],
    ),
    (
        "Table",
        &[
            ("j/k ↑/↓", "Move selection"),
            ("g/G", "First / last row"),
            ("d/Del", "Delete selected expense"),
        ],
    ),
];

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help (any key to close) ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(help_lines()).block(block), area);
}

fn help_lines() -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(*title, heading)));
        lines.extend(keys.iter().map(|(key, what)| key_line(key, what)));
        lines.push(Line::from(""));
    }
    lines
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
