//! Display formatting for earthquake events.
//!
//! Pure functions only: a millisecond timestamp becomes a date line, the
//! tsunami flag becomes one of three fixed labels. Rendering happens in UTC
//! with a literal zone label; the `time` crate carries no timezone-name
//! database, and the feed's timestamps are defined as UTC instants anyway.

use time::macros::format_description;
use time::OffsetDateTime;

/// Label for `tsunami == 0`.
pub const ALERT_NONE: &str = "no tsunami";
/// Label for `tsunami == 1`.
pub const ALERT_ISSUED: &str = "tsunami alert issued";
/// Label for every other flag value.
pub const ALERT_UNAVAILABLE: &str = "alert status not available";

/// Fallback date line when the timestamp cannot be represented.
pub const FALLBACK_DATE: &str = "Thu, 1 Jan 1970 at 00:00:00 UTC";

/// Renders a millisecond Unix timestamp as e.g. `Wed, 5 Sep 2012 at 03:02:52 UTC`.
///
/// Timestamps outside the range the `time` crate can represent render as
/// [`FALLBACK_DATE`] instead of failing; the formatter is total.
pub fn format_event_date(unix_ms: i64) -> String {
    let format = format_description!(
        "[weekday repr:short], [day padding:none] [month repr:short] [year] at [hour]:[minute]:[second] UTC"
    );

    OffsetDateTime::from_unix_timestamp_nanos(i128::from(unix_ms) * 1_000_000)
        .ok()
        .and_then(|instant| instant.format(format).ok())
        .unwrap_or_else(|| FALLBACK_DATE.to_string())
}

/// Maps the tri-state tsunami flag onto its display label. Total over `i64`.
pub fn tsunami_alert_label(flag: i64) -> &'static str {
    match flag {
        0 => ALERT_NONE,
        1 => ALERT_ISSUED,
        _ => ALERT_UNAVAILABLE,
    }
}
