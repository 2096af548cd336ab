use thiserror::Error;

/// Failures of a single API call.
///
/// `Server` carries whatever `msg` the error body contained; the server
/// answers 4xx with the same `{msg}` envelope as success responses, but
/// the field may be absent, in which case `msg` is empty.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server returned {status} ({msg})")]
    Server { status: u16, msg: String },

    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("could not write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// The server-supplied message, if this failure carried one.
    pub fn server_msg(&self) -> Option<&str> {
        match self {
            ApiError::Server { msg, .. } if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }
}
