use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::schemas::StatusReport;

/// Server status: the two fields of `/status` rendered verbatim, plus
/// the system-action keys.
#[derive(Default)]
pub struct StatusView {
    report: Option<StatusReport>,
    is_loading: bool,
}

impl StatusView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_report(&mut self, report: Option<StatusReport>) {
        self.report = report;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }
}

impl Component for StatusView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let label_style = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        match (&self.report, self.is_loading) {
            (Some(report), _) => {
                lines.push(Line::from(vec![
                    Span::styled("Stand: ", label_style),
                    Span::raw(report.activity.as_str()),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Filme: ", label_style),
                    Span::raw(report.count.as_str()),
                ]));
            }
            (None, true) => lines.push(Line::from("lädt...")),
            (None, false) => lines.push(Line::from("Kein Status abgerufen")),
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "r: neu laden   S: System herunterfahren   R: System neu starten",
            Style::default().fg(Color::DarkGray),
        )));

        let view = Paragraph::new(lines)
            .block(Block::default().title("Status").borders(Borders::ALL));
        f.render_widget(view, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('r') => Some(Message::OpenStatus),
            KeyCode::Char('S') => Some(Message::ShutdownRequested),
            KeyCode::Char('R') => Some(Message::RebootRequested),
            _ => None,
        }
    }
}
