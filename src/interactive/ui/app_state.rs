use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::interactive::constants::MESSAGE_CLEAR_DELAY_MS;
use crate::interactive::domain::models::{ActionKind, Panel, sort_rows_by_date_desc};
use crate::interactive::domain::selection::{joined_ids, joined_ids_and_dates};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::schemas::{FileRow, MediaRow, SearchCriteria, StatusReport};

/// Central UI state. All mutation happens in `update`, on the UI thread;
/// the renderer only reads.
pub struct AppState {
    pub panel: Panel,
    pub help_visible: bool,
    pub search: SearchState,
    pub results: TableData<MediaRow>,
    pub queue: TableData<MediaRow>,
    pub files: TableData<FileRow>,
    pub status: StatusState,
    pub ui: UiState,
}

pub struct SearchState {
    pub criteria: SearchCriteria,
    pub is_searching: bool,
    /// Id of the newest issued search; older completions are stale and
    /// get dropped.
    pub current_search_id: u64,
}

pub struct StatusState {
    pub report: Option<StatusReport>,
    pub is_loading: bool,
}

pub struct UiState {
    message: Option<String>,
    message_deadline: Option<Instant>,
}

impl UiState {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Rows plus cursor and marks for one table panel.
///
/// Responses replace, they never merge: `replace` drops cursor and marks
/// along with the old rows.
pub struct TableData<T> {
    pub rows: Vec<T>,
    pub cursor: usize,
    pub marked: BTreeSet<usize>,
    pub is_loading: bool,
}

impl<T> Default for TableData<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            cursor: 0,
            marked: BTreeSet::new(),
            is_loading: false,
        }
    }
}

impl<T> TableData<T> {
    pub fn replace(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.cursor = 0;
        self.marked.clear();
        self.is_loading = false;
    }

    pub fn select_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn toggle_mark(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        if !self.marked.remove(&self.cursor) {
            self.marked.insert(self.cursor);
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.rows.get(self.cursor)
    }

    /// Marked rows in display order.
    pub fn marked_rows(&self) -> impl Iterator<Item = &T> {
        self.marked.iter().filter_map(|index| self.rows.get(*index))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            panel: Panel::Search,
            help_visible: false,
            search: SearchState {
                criteria: SearchCriteria::default(),
                is_searching: false,
                current_search_id: 0,
            },
            results: TableData::default(),
            queue: TableData::default(),
            files: TableData::default(),
            status: StatusState {
                report: None,
                is_loading: false,
            },
            ui: UiState {
                message: None,
                message_deadline: None,
            },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::ShowPanel(panel) => {
                self.panel = panel;
                Command::None
            }
            Message::OpenQueue => {
                self.queue.is_loading = true;
                Command::LoadQueue
            }
            Message::OpenFiles => {
                self.files.is_loading = true;
                Command::LoadFiles
            }
            Message::OpenStatus => {
                self.status.is_loading = true;
                Command::LoadStatus
            }

            Message::CriteriaChanged(criteria) => {
                self.search.criteria = criteria;
                Command::None
            }
            Message::SearchRequested => {
                self.search.is_searching = true;
                Command::ExecuteSearch
            }
            Message::RefreshIndexRequested => Command::RefreshIndex,
            Message::StartDownloadsRequested => Command::StartDownloads,

            Message::SelectUp => {
                match self.panel {
                    Panel::Results => self.results.select_up(),
                    Panel::Queue => self.queue.select_up(),
                    Panel::Files => self.files.select_up(),
                    _ => {}
                }
                Command::None
            }
            Message::SelectDown => {
                match self.panel {
                    Panel::Results => self.results.select_down(),
                    Panel::Queue => self.queue.select_down(),
                    Panel::Files => self.files.select_down(),
                    _ => {}
                }
                Command::None
            }
            Message::ToggleMark => {
                match self.panel {
                    Panel::Results => self.results.toggle_mark(),
                    Panel::Queue => self.queue.toggle_mark(),
                    _ => {}
                }
                Command::None
            }

            Message::QueueSelectionRequested => {
                if self.results.marked.is_empty() {
                    // The source posted an absent form field here, which
                    // the server cannot parse; short-circuit instead.
                    self.show_message("Keine Filme markiert");
                    return Command::None;
                }
                let (ids, dates) = joined_ids_and_dates(self.results.marked_rows());
                Command::QueueSelection { ids, dates }
            }
            Message::DeleteQueuedRequested => {
                if self.queue.marked.is_empty() {
                    self.show_message("Keine Einträge markiert");
                    return Command::None;
                }
                let ids = joined_ids(self.queue.marked_rows());
                Command::DeleteQueued { ids }
            }
            Message::FetchFileRequested => match self.files.current() {
                Some(file) => {
                    let path = file.path.clone();
                    let label = if file.name.is_empty() {
                        path.clone()
                    } else {
                        file.name.clone()
                    };
                    self.show_message(format!("Lade {label} herunter..."));
                    Command::FetchFile { path }
                }
                None => Command::None,
            },
            Message::DeleteFileRequested => match self.files.current() {
                Some(file) => Command::DeleteFile {
                    path: file.path.clone(),
                },
                None => Command::None,
            },

            Message::ShutdownRequested => {
                // Fixed text regardless of the request outcome.
                self.show_message("Shutting the system down...");
                Command::Shutdown
            }
            Message::RebootRequested => {
                self.show_message("Rebooting the system...");
                Command::Reboot
            }

            Message::SearchCompleted(id, outcome) => {
                if id != self.search.current_search_id {
                    // A newer search is in flight; this answer is stale.
                    return Command::None;
                }
                self.search.is_searching = false;
                match outcome {
                    Ok(mut rows) => {
                        sort_rows_by_date_desc(&mut rows);
                        self.results.replace(rows);
                        self.panel = Panel::Results;
                    }
                    Err(err) => self.show_error(&err),
                }
                Command::None
            }
            Message::QueueLoaded(outcome) => {
                self.queue.is_loading = false;
                match outcome {
                    Ok(rows) => {
                        self.queue.replace(rows);
                        self.panel = Panel::Queue;
                    }
                    Err(err) => self.show_error(&err),
                }
                Command::None
            }
            Message::FilesLoaded(outcome) => {
                self.files.is_loading = false;
                match outcome {
                    Ok(rows) => {
                        self.files.replace(rows);
                        self.panel = Panel::Files;
                    }
                    Err(err) => self.show_error(&err),
                }
                Command::None
            }
            Message::StatusLoaded(outcome) => {
                self.status.is_loading = false;
                match outcome {
                    Ok(report) => {
                        self.status.report = Some(report);
                        self.panel = Panel::Status;
                    }
                    Err(err) => self.show_error(&err),
                }
                Command::None
            }
            Message::FetchFileCompleted(outcome) => {
                match outcome {
                    Ok((path, bytes)) => {
                        self.show_message(format!(
                            "Gespeichert: {} ({bytes} Bytes)",
                            path.display()
                        ));
                    }
                    Err(err) => self.show_error(&err),
                }
                Command::None
            }
            Message::ActionCompleted(kind, outcome) => match outcome {
                Ok(msg) => {
                    self.show_message(msg.text().to_string());
                    if kind == ActionKind::DeleteQueued {
                        // The source reloaded the queue right after a
                        // successful delete; files deliberately stay
                        // stale until the next explicit refresh.
                        self.queue.is_loading = true;
                        Command::LoadQueue
                    } else {
                        Command::None
                    }
                }
                Err(err) => {
                    // File deletion answers 4xx with the same {msg}
                    // envelope; show it like the success path would.
                    match (kind, err.server_msg()) {
                        (ActionKind::DeleteFile, Some(msg)) => {
                            self.show_message(msg.to_string());
                        }
                        _ => self.show_error(&err),
                    }
                    Command::None
                }
            },

            Message::ToggleHelp => {
                self.help_visible = !self.help_visible;
                Command::None
            }
        }
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.show_message_for(text, Duration::from_millis(MESSAGE_CLEAR_DELAY_MS));
    }

    pub fn show_message_for(&mut self, text: impl Into<String>, duration: Duration) {
        self.show_message_at(text, duration, Instant::now());
    }

    /// A newer message replaces both text and deadline, so a stale
    /// deadline can never wipe a newer message early.
    pub fn show_message_at(&mut self, text: impl Into<String>, duration: Duration, now: Instant) {
        self.ui.message = Some(text.into());
        self.ui.message_deadline = Some(now + duration);
    }

    /// Called once per loop tick.
    pub fn clear_expired_message(&mut self, now: Instant) {
        if self
            .ui
            .message_deadline
            .is_some_and(|deadline| now >= deadline)
        {
            self.ui.message = None;
            self.ui.message_deadline = None;
        }
    }

    fn show_error(&mut self, err: &crate::api::ApiError) {
        self.show_message(format!("Fehler: {err}"));
    }
}
