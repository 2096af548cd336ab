use std::path::PathBuf;

use chrono::NaiveDate;

use crate::api::ApiError;
use crate::schemas::{FileRow, MediaRow, SearchCriteria, ServerMsg, StatusReport};

/// Content panels of the console.
///
/// Exactly one panel is rendered at any time; the closed enum is what
/// enforces that, so there is no hide/show bookkeeping anywhere. The
/// help overlay is not a panel, it is drawn over the active one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Panel {
    Search,
    Results,
    Queue,
    Files,
    Status,
}

impl Panel {
    /// Tab label, matching the section names of the server's own web UI.
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Search => "Suche",
            Panel::Results => "Filme",
            Panel::Queue => "Liste",
            Panel::Files => "Dateien",
            Panel::Status => "Status",
        }
    }

    pub const ALL: [Panel; 5] = [
        Panel::Search,
        Panel::Results,
        Panel::Queue,
        Panel::Files,
        Panel::Status,
    ];
}

/// Requests the UI thread hands to the api worker.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiRequest {
    Search { id: u64, criteria: SearchCriteria },
    RefreshIndex,
    QueueSelection { ids: String, dates: String },
    ListQueue,
    DeleteQueued { ids: String },
    ListFiles,
    StartDownloads,
    DeleteFile { path: String },
    FetchFile { path: String, dest_dir: PathBuf },
    LoadStatus,
    Shutdown,
    Reboot,
}

/// Completions the worker sends back, drained once per loop tick.
///
/// Every outcome is an explicit `Result`; the system actions have no
/// variant here because their UI behavior is unconditional and their
/// outcome is only logged (see `ApiService::execute`).
#[derive(Debug)]
pub enum ApiResponse {
    Search {
        id: u64,
        outcome: Result<Vec<MediaRow>, ApiError>,
    },
    QueueLoaded(Result<Vec<MediaRow>, ApiError>),
    FilesLoaded(Result<Vec<FileRow>, ApiError>),
    StatusLoaded(Result<StatusReport, ApiError>),
    FetchedFile(Result<(PathBuf, u64), ApiError>),
    Action(ActionKind, Result<ServerMsg, ApiError>),
}

/// The `{msg}`-shaped actions, distinguished where completion behavior
/// differs (queue deletion reloads the queue, file deletion surfaces its
/// error body).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionKind {
    RefreshIndex,
    QueueSelection,
    DeleteQueued,
    DeleteFile,
    StartDownloads,
}

/// Parse the server's `dd.mm.YYYY` / `dd.mm.yy` date strings.
pub fn parse_row_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d.%m.%y"))
        .ok()
}

/// Newest first; rows without a parseable date go last.
pub fn sort_rows_by_date_desc(rows: &mut [MediaRow]) {
    rows.sort_by(|a, b| parse_row_date(&b.date).cmp(&parse_row_date(&a.date)));
}
