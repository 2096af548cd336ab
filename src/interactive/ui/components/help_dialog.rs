use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;

/// Key reference, drawn over the active panel.
#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }
}

const HELP_TEXT: &[(&str, &str)] = &[
    ("F1..F5", "Suche / Filme / Liste / Dateien / Status"),
    ("Enter", "Suche abschicken bzw. Auswahl vormerken"),
    ("Space", "Zeile markieren"),
    ("x", "markierte Einträge bzw. Datei löschen"),
    ("r", "aktive Liste neu laden"),
    ("Ctrl+R", "Filmliste auf dem Server aktualisieren"),
    ("Ctrl+D", "Downloads auf dem Server starten"),
    ("S / R", "System herunterfahren / neu starten (Status)"),
    ("q", "beenden (außerhalb der Suche)"),
    ("Ctrl+C Ctrl+C", "beenden"),
];

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(10).min(60).max(30);
        let height = (HELP_TEXT.len() as u16 + 4).min(area.height);
        let dialog = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        let lines: Vec<Line> = HELP_TEXT
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("{key:>14}  "),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*action),
                ])
            })
            .collect();

        f.render_widget(Clear, dialog);
        let help = Paragraph::new(lines).block(
            Block::default()
                .title("Tasten (beliebige Taste schließt)")
                .borders(Borders::ALL),
        );
        f.render_widget(help, dialog);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::ToggleHelp)
    }
}
