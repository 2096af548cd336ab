//! Joining marked table rows into the server's wire format.
//!
//! `/vormerken` and `/loeschen` take their id and date lists as single
//! strings split on single spaces, with no escaping. A value that itself
//! contains a space therefore cannot survive the round trip; this module
//! reproduces the contract instead of inventing an escape scheme the
//! server would not understand.

use crate::schemas::MediaRow;

/// Space-joined `_ID` and `DATUM` strings of `rows`, in iteration
/// (display) order. Used when queueing a selection.
pub fn joined_ids_and_dates<'a, I>(rows: I) -> (String, String)
where
    I: IntoIterator<Item = &'a MediaRow>,
{
    let mut ids = String::new();
    let mut dates = String::new();
    for row in rows {
        if !ids.is_empty() {
            ids.push(' ');
        }
        ids.push_str(&row.id);
        if !dates.is_empty() {
            dates.push(' ');
        }
        dates.push_str(&row.date);
    }
    (ids, dates)
}

/// Space-joined `_ID` string of `rows`. Used when deleting queued
/// entries, which takes ids only.
pub fn joined_ids<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = &'a MediaRow>,
{
    let mut ids = String::new();
    for row in rows {
        if !ids.is_empty() {
            ids.push(' ');
        }
        ids.push_str(&row.id);
    }
    ids
}
