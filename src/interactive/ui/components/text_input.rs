use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line text input with emacs-style editing, used for the search
/// form fields. Not a `Component`: the owning form routes keys to the
/// focused input and turns changes into messages itself.
#[derive(Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.value = value;
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .chars()
            .take(char_index)
            .map(|c| c.len_utf8())
            .sum()
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_len() {
            return false;
        }
        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.value.drain(byte_start..byte_end);
        self.cursor = start;
        true
    }

    fn prev_word_boundary(&self) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }
        pos
    }

    /// Returns true when the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::ALT) {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor = self.char_len();
                    false
                }
                KeyCode::Char('b') => {
                    self.cursor = self.cursor.saturating_sub(1);
                    false
                }
                KeyCode::Char('f') => {
                    if self.cursor < self.char_len() {
                        self.cursor += 1;
                    }
                    false
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor),
                KeyCode::Char('k') => {
                    let len = self.char_len();
                    self.delete_range(self.cursor, len)
                }
                KeyCode::Char('w') => {
                    let boundary = self.prev_word_boundary();
                    self.delete_range(boundary, self.cursor)
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_index = self.byte_index(self.cursor);
                self.value.insert(byte_index, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.delete_range(self.cursor - 1, self.cursor)
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.char_len() {
                    self.delete_range(self.cursor, self.cursor + 1)
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                if self.cursor < self.char_len() {
                    self.cursor += 1;
                }
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                false
            }
            _ => false,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, label: &str, focused: bool) {
        let text = if focused {
            let (before, after): (Vec<_>, Vec<_>) = self
                .value
                .chars()
                .enumerate()
                .partition(|(i, _)| *i < self.cursor);
            let before: String = before.into_iter().map(|(_, c)| c).collect();
            let after: String = after.into_iter().map(|(_, c)| c).collect();
            Line::from(vec![
                Span::raw(before),
                Span::styled(
                    after.chars().next().unwrap_or(' ').to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ),
                Span::raw(after.chars().skip(1).collect::<String>()),
            ])
        } else {
            Line::from(self.value.as_str())
        };

        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(text)
            .block(Block::default().title(label.to_string()).borders(Borders::ALL))
            .style(style);
        f.render_widget(input, area);
    }
}
