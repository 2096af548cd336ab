use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::schemas::FileRow;

/// Recorded files table. Single-row actions only: fetching and deleting
/// act on the cursor row, so there is no marking here.
#[derive(Default)]
pub struct FileTable {
    rows: Vec<FileRow>,
    cursor: usize,
    is_loading: bool,
}

impl FileTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rows(&mut self, rows: Vec<FileRow>) {
        self.rows = rows;
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    fn title(&self) -> String {
        if self.is_loading {
            "Dateien – lädt...".to_string()
        } else {
            format!("Dateien ({})", self.rows.len())
        }
    }
}

impl Component for FileTable {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.rows.is_empty() {
            let empty = Paragraph::new(if self.is_loading {
                "lädt..."
            } else {
                "Keine Dateien"
            })
            .block(Block::default().title(self.title()).borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let header = Row::new(["Datei", "Sender", "Titel", "Film", "Aufnahme"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.rows.iter().map(|row| {
            let name = if row.name.is_empty() {
                row.path.as_str()
            } else {
                row.name.as_str()
            };
            Row::new([
                Cell::from(name),
                Cell::from(row.sender.as_str()),
                Cell::from(row.title.as_str()),
                Cell::from(row.film_date.as_str()),
                Cell::from(row.file_date.as_str()),
            ])
        });

        let widths = [
            Constraint::Percentage(35),
            Constraint::Length(10),
            Constraint::Percentage(35),
            Constraint::Length(9),
            Constraint::Length(9),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(self.title())
                    .title_bottom("Enter: herunterladen   x: löschen   r: neu laden")
                    .borders(Borders::ALL),
            )
            .row_highlight_style(
                Style::default()
                    .bg(Color::Yellow)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );

        let mut table_state = TableState::default();
        table_state.select(Some(self.cursor));
        f.render_stateful_widget(table, area, &mut table_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => Some(Message::SelectUp),
            KeyCode::Down => Some(Message::SelectDown),
            KeyCode::Enter => Some(Message::FetchFileRequested),
            KeyCode::Char('x') => Some(Message::DeleteFileRequested),
            KeyCode::Char('r') => Some(Message::OpenFiles),
            _ => None,
        }
    }
}
