use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::interactive::domain::models::Panel;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;

/// One tab per panel with its function key. Display only; the function
/// keys are handled globally so they work from any focus.
pub struct TabBar {
    active: Panel,
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

impl TabBar {
    pub fn new() -> Self {
        Self {
            active: Panel::Search,
        }
    }

    pub fn set_active(&mut self, active: Panel) {
        self.active = active;
    }
}

impl Component for TabBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::raw(" ")];
        for (index, panel) in Panel::ALL.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            let label = format!(" F{} {} ", index + 1, panel.title());
            if *panel == self.active {
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    label,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                ));
            }
        }
        spans.push(Span::styled(
            "  ?: Hilfe",
            Style::default().fg(Color::DarkGray),
        ));

        let tabs = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(tabs, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        None
    }
}
