use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::interactive::ui::components::{Component, text_input::TextInput};
use crate::interactive::ui::events::Message;
use crate::schemas::{SearchCriteria, some_nonempty};

const FIELD_COUNT: usize = 6;
const LABELS: [&str; FIELD_COUNT] = [
    "Alle Felder",
    "Sender",
    "Thema",
    "Datum",
    "Titel",
    "Beschreibung",
];

/// The search criteria form. The inputs own the text; every edit is
/// reported upward as a full `CriteriaChanged` snapshot.
pub struct SearchForm {
    inputs: [TextInput; FIELD_COUNT],
    focus: usize,
    is_searching: bool,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            inputs: Default::default(),
            focus: 0,
            is_searching: false,
        }
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            global: some_nonempty(self.inputs[0].value().to_string()),
            sender: some_nonempty(self.inputs[1].value().to_string()),
            thema: some_nonempty(self.inputs[2].value().to_string()),
            datum: some_nonempty(self.inputs[3].value().to_string()),
            titel: some_nonempty(self.inputs[4].value().to_string()),
            beschreibung: some_nonempty(self.inputs[5].value().to_string()),
        }
    }

    /// Adopt externally changed criteria without clobbering the cursor
    /// on every frame.
    pub fn sync_criteria(&mut self, criteria: &SearchCriteria) {
        if self.criteria() == *criteria {
            return;
        }
        let values = [
            &criteria.global,
            &criteria.sender,
            &criteria.thema,
            &criteria.datum,
            &criteria.titel,
            &criteria.beschreibung,
        ];
        for (input, value) in self.inputs.iter_mut().zip(values) {
            input.set_value(value.clone().unwrap_or_default());
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
    }
}

impl Component for SearchForm {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut constraints = vec![Constraint::Length(3); FIELD_COUNT];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (index, input) in self.inputs.iter().enumerate() {
            input.render(f, chunks[index], LABELS[index], index == self.focus);
        }

        let hint = if self.is_searching {
            "Suche läuft..."
        } else {
            "Enter: suchen   Ctrl+R: Filmliste aktualisieren   Ctrl+D: Downloads starten"
        };
        let hint = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, chunks[FIELD_COUNT]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => return Some(Message::RefreshIndexRequested),
                KeyCode::Char('d') => return Some(Message::StartDownloadsRequested),
                _ => {}
            }
        }

        match key.code {
            KeyCode::Enter => Some(Message::SearchRequested),
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                None
            }
            _ => {
                if self.inputs[self.focus].handle_key(key) {
                    Some(Message::CriteriaChanged(self.criteria()))
                } else {
                    None
                }
            }
        }
    }
}
