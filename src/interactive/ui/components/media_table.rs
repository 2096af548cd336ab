use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::schemas::MediaRow;

/// Whether this table shows search results or the download queue; the
/// two differ in columns and in what Enter/x do.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MediaTableKind {
    Results,
    Queue,
}

/// Film table with multi-row marking. Marks live in the app state and
/// are injected each frame; the component only translates keys.
pub struct MediaTable {
    kind: MediaTableKind,
    rows: Vec<MediaRow>,
    cursor: usize,
    marked: BTreeSet<usize>,
    is_loading: bool,
}

impl MediaTable {
    pub fn new(kind: MediaTableKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            cursor: 0,
            marked: BTreeSet::new(),
            is_loading: false,
        }
    }

    pub fn set_rows(&mut self, rows: Vec<MediaRow>) {
        self.rows = rows;
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    pub fn set_marked(&mut self, marked: BTreeSet<usize>) {
        self.marked = marked;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    fn title(&self) -> String {
        let name = match self.kind {
            MediaTableKind::Results => "Filme",
            MediaTableKind::Queue => "Liste",
        };
        if self.is_loading {
            format!("{name} – lädt...")
        } else {
            format!("{name} ({})", self.rows.len())
        }
    }

    fn hint(&self) -> &'static str {
        match self.kind {
            MediaTableKind::Results => "Space: markieren   Enter: vormerken",
            MediaTableKind::Queue => "Space: markieren   x: löschen   r: neu laden",
        }
    }
}

impl Component for MediaTable {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.rows.is_empty() {
            let empty = Paragraph::new(if self.is_loading {
                "lädt..."
            } else {
                "Keine Einträge"
            })
            .block(Block::default().title(self.title()).borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let header = match self.kind {
            MediaTableKind::Results => {
                Row::new(["", "Sender", "Thema", "Titel", "Datum", "Dauer"])
            }
            MediaTableKind::Queue => {
                Row::new(["", "Sender", "Thema", "Titel", "Datum", "Status"])
            }
        }
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.rows.iter().enumerate().map(|(index, row)| {
            let mark = if self.marked.contains(&index) { "●" } else { " " };
            let last = match self.kind {
                MediaTableKind::Results => row.duration.as_str(),
                MediaTableKind::Queue => row.status.as_str(),
            };
            Row::new([
                Cell::from(mark),
                Cell::from(row.sender.as_str()),
                Cell::from(row.topic.as_str()),
                Cell::from(row.title.as_str()),
                Cell::from(row.date.as_str()),
                Cell::from(last),
            ])
        });

        let widths = [
            Constraint::Length(1),
            Constraint::Length(10),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Length(10),
            Constraint::Length(8),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(self.title())
                    .title_bottom(self.hint())
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
            KeyCode::Char(' ') => Some(Message::ToggleMark),
            KeyCode::Enter if self.kind == MediaTableKind::Results => {
                Some(Message::QueueSelectionRequested)
            }
            KeyCode::Char('x') if self.kind == MediaTableKind::Queue => {
                Some(Message::DeleteQueuedRequested)
            }
            KeyCode::Char('r') if self.kind == MediaTableKind::Queue => {
                Some(Message::OpenQueue)
            }
            _ => None,
        }
    }
}
