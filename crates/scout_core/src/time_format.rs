use chrono::{DateTime, Utc};

/// Returned in place of a date when a timestamp cannot be represented.
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats epoch seconds as `YYYY-MM-DD HH:MM:SS`.
///
/// Timestamps are shown in UTC, exactly as the backend records them; no
/// local-zone shift is applied.
pub fn format_epoch_seconds(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(moment) => moment.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Like [`format_epoch_seconds`], with a missing timestamp shown as
/// [`INVALID_DATE`].
pub fn format_created(secs: Option<i64>) -> String {
    secs.map_or_else(|| INVALID_DATE.to_string(), format_epoch_seconds)
}
