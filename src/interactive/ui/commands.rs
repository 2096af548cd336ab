/// Side effects `AppState::update` asks the runtime to perform. Each one
/// except `None` turns into exactly one request for the api worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    ExecuteSearch,
    RefreshIndex,
    QueueSelection { ids: String, dates: String },
    LoadQueue,
    DeleteQueued { ids: String },
    LoadFiles,
    StartDownloads,
    DeleteFile { path: String },
    FetchFile { path: String },
    LoadStatus,
    Shutdown,
    Reboot,
}
