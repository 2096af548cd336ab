use std::path::PathBuf;

use crate::api::ApiError;
use crate::interactive::domain::models::{ActionKind, Panel};
use crate::schemas::{FileRow, MediaRow, SearchCriteria, ServerMsg, StatusReport};

/// Everything that flows into `AppState::update`: key handlers reduce to
/// the request-shaped variants, the api worker to the completion-shaped
/// ones.
#[derive(Debug)]
pub enum Message {
    // Panel switching. `ShowPanel` is the purely local switch; the data
    // panels are opened by firing their load request and become active
    // when the response arrives.
    ShowPanel(Panel),
    OpenQueue,
    OpenFiles,
    OpenStatus,

    // Search form
    CriteriaChanged(SearchCriteria),
    SearchRequested,
    RefreshIndexRequested,
    StartDownloadsRequested,

    // Table navigation, routed to the active panel
    SelectUp,
    SelectDown,
    ToggleMark,

    // Row actions
    QueueSelectionRequested,
    DeleteQueuedRequested,
    FetchFileRequested,
    DeleteFileRequested,

    // System actions
    ShutdownRequested,
    RebootRequested,

    // Worker completions
    SearchCompleted(u64, Result<Vec<MediaRow>, ApiError>),
    QueueLoaded(Result<Vec<MediaRow>, ApiError>),
    FilesLoaded(Result<Vec<FileRow>, ApiError>),
    StatusLoaded(Result<StatusReport, ApiError>),
    FetchFileCompleted(Result<(PathBuf, u64), ApiError>),
    ActionCompleted(ActionKind, Result<ServerMsg, ApiError>),

    // Overlay
    ToggleHelp,
}
