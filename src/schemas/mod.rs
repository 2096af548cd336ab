//! Typed payloads for the recorder's web API.
//!
//! The server serializes database rows with uppercase German keys and is
//! liberal about which of them are present, so everything except the keys
//! that get posted back to it is optional with an empty default.

use serde::{Deserialize, Deserializer, Serialize};

/// Search criteria posted as a form to `/suche`.
///
/// Empty criteria are omitted from the form; the server treats a missing
/// field and an empty field the same way. The wire key for the
/// description field keeps the server's historical misspelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titel: Option<String>,
    #[serde(
        rename = "bechreibung",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub beschreibung: Option<String>,
}

impl SearchCriteria {
    /// Criteria matching `text` against all fields.
    pub fn global(text: impl Into<String>) -> Self {
        Self {
            global: some_nonempty(text.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_none()
            && self.sender.is_none()
            && self.thema.is_none()
            && self.datum.is_none()
            && self.titel.is_none()
            && self.beschreibung.is_none()
    }
}

/// `None` for empty or whitespace-only input.
pub fn some_nonempty(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}

/// One film entry, as returned by `/suche` and `/downloads`.
///
/// Only `_ID` and `DATUM` are load-bearing: they are posted back when a
/// selection is queued. The rest is display data and varies with the
/// server version; `STATUS`/`DATUMSTATUS` only appear on queued entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRow {
    #[serde(rename = "_ID", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "DATUM", default)]
    pub date: String,
    #[serde(rename = "SENDER", default)]
    pub sender: String,
    #[serde(rename = "THEMA", default)]
    pub topic: String,
    #[serde(rename = "TITEL", default)]
    pub title: String,
    #[serde(rename = "DAUER", default)]
    pub duration: String,
    #[serde(rename = "BESCHREIBUNG", default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "STATUS", default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(rename = "DATUMSTATUS", default, skip_serializing_if = "String::is_empty")]
    pub status_date: String,
}

/// One recorded file, as returned by `/dateien`.
///
/// `DATEINAME` is the server-side path and the key `/del_datei` and
/// `/get_datei` expect; `DATEI` is just the basename for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRow {
    #[serde(rename = "DATEINAME")]
    pub path: String,
    #[serde(rename = "DATEI", default)]
    pub name: String,
    #[serde(rename = "SENDER", default)]
    pub sender: String,
    #[serde(rename = "TITEL", default)]
    pub title: String,
    #[serde(rename = "BESCHREIBUNG", default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "DATUMFILM", default)]
    pub film_date: String,
    #[serde(rename = "DATUMDATEI", default)]
    pub file_date: String,
}

/// Response of `/status`.
///
/// `_anzahl` arrives as a string from current servers and as a number
/// from older ones; both forms are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(rename = "_akt", default)]
    pub activity: String,
    #[serde(rename = "_anzahl", default, deserialize_with = "string_or_number")]
    pub count: String,
}

/// The `{msg}` envelope most mutating routes answer with. Error bodies
/// use the same shape but may omit the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMsg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ServerMsg {
    pub fn text(&self) -> &str {
        self.msg.as_deref().unwrap_or_default()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
