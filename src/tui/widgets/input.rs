//! Text input widget
//!
//! A single-line text field. The cursor counts characters, not bytes, so
//! multi-byte input edits cleanly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() as u16 + 2
        };

        if label_width > 0 {
            let label_style = if self.focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), label_style),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width.min(area.width));
        }

        let input_start = area.x.saturating_add(label_width);
        let right_edge = area.x.saturating_add(area.width);
        if input_start >= right_edge {
            return;
        }

        let (display_text, text_style) = if self.content.is_empty() && !self.focused {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (self.content.as_str(), Style::default().fg(Color::White))
        } else {
            (self.content.as_str(), Style::default().fg(Color::Yellow))
        };

        buf.set_stringn(
            input_start,
            area.y,
            display_text,
            (right_edge - input_start) as usize,
            text_style,
        );

        if self.focused {
            let cursor_x = input_start.saturating_add(self.cursor as u16);
            if cursor_x < right_edge {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Milk".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Milk");
        assert_eq!(input.cursor, 4);

        input.backspace();
        assert_eq!(input.value(), "Mil");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("Caf");
        input.insert('é');
        input.move_start();
        input.insert('¡');
        assert_eq!(input.value(), "¡Café");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "¡Caf");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "Caf");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = TextInput::new().content("3.5");
        input.move_left();
        input.move_left();
        input.insert('0');
        assert_eq!(input.value(), "30.5");
    }

    #[test]
    fn test_render_shows_label_and_placeholder() {
        let input = TextInput::new().label("Amount").placeholder("0.00");
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        let rendered: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert!(rendered.starts_with("Amount: 0.00"));
    }
}
