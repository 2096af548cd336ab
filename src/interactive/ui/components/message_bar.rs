use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;

/// The transient message region, visible under every panel. Empty when
/// no message is live; the clear deadline lives in the app state.
#[derive(Default)]
pub struct MessageBar {
    message: Option<String>,
}

impl MessageBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }
}

impl Component for MessageBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let bar = match &self.message {
            Some(text) => Paragraph::new(text.as_str()).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Paragraph::new(""),
        };
        f.render_widget(bar, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
