//! Blocking HTTP client for the recorder's web API.
//!
//! The route set, methods and body shapes are a fixed contract owned by
//! the server; this module only translates between typed values and that
//! contract. All calls are synchronous and meant to run on a worker
//! thread, never on the UI loop.

mod error;
#[cfg(test)]
mod tests;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::schemas::{FileRow, MediaRow, SearchCriteria, ServerMsg, StatusReport};

pub use error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the main API routes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: &str, timeout: Duration) -> ApiResult<Self> {
        let base = Url::parse(base)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Transport {
                url: base.to_string(),
                source,
            })?;
        Ok(Self { http, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// POST `/suche` with the serialized criteria form.
    pub fn search(&self, criteria: &SearchCriteria) -> ApiResult<Vec<MediaRow>> {
        let response = self.post_form("/suche", criteria)?;
        rows_from(response)
    }

    /// GET `/aktualisieren`: ask the server to refresh its film index.
    pub fn refresh_index(&self) -> ApiResult<ServerMsg> {
        let response = self.get("/aktualisieren")?;
        decode(response)
    }

    /// POST `/vormerken` with space-joined id and date lists.
    ///
    /// The server splits both fields on single spaces; the caller is
    /// responsible for the join (see `selection::joined_ids_and_dates`).
    pub fn queue_selection(&self, ids: &str, dates: &str) -> ApiResult<ServerMsg> {
        let response = self.post_form("/vormerken", &[("ids", ids), ("dates", dates)])?;
        decode(response)
    }

    /// POST `/downloads`: the list of queued entries.
    pub fn list_queued(&self) -> ApiResult<Vec<MediaRow>> {
        let response = self.post_empty("/downloads")?;
        rows_from(response)
    }

    /// POST `/loeschen` with a space-joined id list.
    pub fn delete_queued(&self, ids: &str) -> ApiResult<ServerMsg> {
        let response = self.post_form("/loeschen", &[("ids", ids)])?;
        decode(response)
    }

    /// POST `/dateien`: the list of recorded files.
    pub fn list_files(&self) -> ApiResult<Vec<FileRow>> {
        let response = self.post_empty("/dateien")?;
        rows_from(response)
    }

    /// GET `/download`: start downloading everything queued.
    pub fn start_downloads(&self) -> ApiResult<ServerMsg> {
        let response = self.get("/download")?;
        decode(response)
    }

    /// POST `/del_datei`. The error body's `msg` survives inside
    /// `ApiError::Server` so callers can surface it either way.
    pub fn delete_file(&self, name: &str) -> ApiResult<ServerMsg> {
        let response = self.post_form("/del_datei", &[("name", name)])?;
        decode(response)
    }

    /// GET `/get_datei` and stream the body into `dest_dir`.
    ///
    /// Returns the written path and the number of bytes. The file name is
    /// the basename of `name`, mirroring the attachment name the server
    /// would send a browser.
    pub fn fetch_file(&self, name: &str, dest_dir: &Path) -> ApiResult<(PathBuf, u64)> {
        let mut url = self.endpoint("/get_datei")?;
        url.query_pairs_mut().append_pair("name", name);
        debug!(%url, "GET");
        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        let mut response = check(&url, response)?;

        let file_name = Path::new(name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "download".to_string());
        let dest = dest_dir.join(file_name);
        let mut file = File::create(&dest).map_err(|source| ApiError::Io {
            path: dest.display().to_string(),
            source,
        })?;
        let bytes = response
            .copy_to(&mut file)
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        debug!(path = %dest.display(), bytes, "saved file");
        Ok((dest, bytes))
    }

    /// GET `/status`: current activity and film count.
    pub fn status(&self) -> ApiResult<StatusReport> {
        let response = self.get("/status")?;
        decode(response)
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base.join(path)?)
    }

    fn get(&self, path: &str) -> ApiResult<Response> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        check(&url, response)
    }

    fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> ApiResult<Response> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let response = self
            .http
            .post(url.clone())
            .form(form)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        check(&url, response)
    }

    fn post_empty(&self, path: &str) -> ApiResult<Response> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let response = self
            .http
            .post(url.clone())
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        check(&url, response)
    }
}

/// Client for the system-control scripts, which live in a namespace of
/// their own next to the main API. Responses are ignored beyond the
/// status line; there is nothing to decode.
#[derive(Debug, Clone)]
pub struct SystemControl {
    http: Client,
    base: Url,
}

impl SystemControl {
    pub fn new(base: &str, timeout: Duration) -> ApiResult<Self> {
        let base = Url::parse(base)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Transport {
                url: base.to_string(),
                source,
            })?;
        Ok(Self { http, base })
    }

    pub fn shutdown(&self) -> ApiResult<()> {
        self.post("/php/shutdown.php")
    }

    pub fn reboot(&self) -> ApiResult<()> {
        self.post("/php/reboot.php")
    }

    fn post(&self, path: &str) -> ApiResult<()> {
        let url = self.base.join(path)?;
        debug!(%url, "POST");
        let response = self
            .http
            .post(url.clone())
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        check(&url, response)?;
        Ok(())
    }
}

/// Map non-2xx responses to `ApiError::Server`, salvaging the `{msg}`
/// body when one is present.
fn check(url: &Url, response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let msg = response
        .json::<ServerMsg>()
        .map(|m| m.text().to_string())
        .unwrap_or_default();
    warn!(%url, %status, msg, "request failed");
    Err(ApiError::Server {
        status: status.as_u16(),
        msg,
    })
}

fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let url = response.url().clone();
    response.json().map_err(|source| ApiError::Decode {
        url: url.to_string(),
        reason: source.to_string(),
    })
}

/// Decode a row array, tolerating the server's empty-list quirks: it
/// answers `{}` when the download queue is empty and a malformed `{[]}`
/// when no files exist. Anything that is not an array becomes an empty
/// list; anything unparseable that *looks* like a payload is an error.
fn rows_from<T: DeserializeOwned>(response: Response) -> ApiResult<Vec<T>> {
    let url = response.url().clone();
    let body = response.text().map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;

    let value: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) if body.trim() == "{[]}" => {
            // Historical server bug: literal "{[]}" for an empty file list.
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(ApiError::Decode {
                url: url.to_string(),
                reason: err.to_string(),
            });
        }
    };

    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|err| ApiError::Decode {
                    url: url.to_string(),
                    reason: err.to_string(),
                })
            })
            .collect(),
        serde_json::Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        serde_json::Value::Null => Ok(Vec::new()),
        other => {
            warn!(%url, "expected an array, got {other}");
            Err(ApiError::Decode {
                url: url.to_string(),
                reason: "expected an array of rows".to_string(),
            })
        }
    }
}
