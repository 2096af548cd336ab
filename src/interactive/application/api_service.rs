use tracing::warn;

use crate::api::{ApiClient, SystemControl};
use crate::interactive::domain::models::{ActionKind, ApiRequest, ApiResponse};

/// Executes worker requests against the API clients.
///
/// One call per request, synchronous; the worker thread is the only
/// caller. System actions return `None`: their UI behavior is
/// unconditional, so the outcome is logged here instead of being
/// silently dropped.
pub struct ApiService {
    api: ApiClient,
    system: SystemControl,
}

impl ApiService {
    pub fn new(api: ApiClient, system: SystemControl) -> Self {
        Self { api, system }
    }

    pub fn execute(&self, request: ApiRequest) -> Option<ApiResponse> {
        match request {
            ApiRequest::Search { id, criteria } => Some(ApiResponse::Search {
                id,
                outcome: self.api.search(&criteria),
            }),
            ApiRequest::RefreshIndex => Some(ApiResponse::Action(
                ActionKind::RefreshIndex,
                self.api.refresh_index(),
            )),
            ApiRequest::QueueSelection { ids, dates } => Some(ApiResponse::Action(
                ActionKind::QueueSelection,
                self.api.queue_selection(&ids, &dates),
            )),
            ApiRequest::ListQueue => Some(ApiResponse::QueueLoaded(self.api.list_queued())),
            ApiRequest::DeleteQueued { ids } => Some(ApiResponse::Action(
                ActionKind::DeleteQueued,
                self.api.delete_queued(&ids),
            )),
            ApiRequest::ListFiles => Some(ApiResponse::FilesLoaded(self.api.list_files())),
            ApiRequest::StartDownloads => Some(ApiResponse::Action(
                ActionKind::StartDownloads,
                self.api.start_downloads(),
            )),
            ApiRequest::DeleteFile { path } => Some(ApiResponse::Action(
                ActionKind::DeleteFile,
                self.api.delete_file(&path),
            )),
            ApiRequest::FetchFile { path, dest_dir } => {
                Some(ApiResponse::FetchedFile(self.api.fetch_file(&path, &dest_dir)))
            }
            ApiRequest::LoadStatus => Some(ApiResponse::StatusLoaded(self.api.status())),
            ApiRequest::Shutdown => {
                if let Err(err) = self.system.shutdown() {
                    warn!("shutdown request failed: {err}");
                }
                None
            }
            ApiRequest::Reboot => {
                if let Err(err) = self.system.reboot() {
                    warn!("reboot request failed: {err}");
                }
                None
            }
        }
    }
}
