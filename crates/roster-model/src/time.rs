//! Hospital-local timestamps.
//!
//! The roster stamps records in the hospital's wall-clock time (UTC+8) and
//! writes them to the table as `YYYY-MM-DD HH:MM:SS`. Rows written by older
//! tooling may carry unparsable timestamps; parsers here return `Option` so
//! callers can decide whether such rows are skipped or kept.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// Wire format for the last-modified and archive timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Offset of the hospital's local time zone (Malaysia, UTC+8, no DST).
pub fn hospital_offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("fixed +08:00 offset is valid")
}

/// Current wall-clock time at the hospital.
pub fn hospital_now() -> NaiveDateTime {
    let zoned: DateTime<FixedOffset> = Utc::now().with_timezone(&hospital_offset());
    zoned.naive_local()
}

/// Format a timestamp in the wire format.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a wire timestamp; `None` when the cell does not match the format.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

/// Calendar date of a wire timestamp, if it parses.
pub fn timestamp_date(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw).map(|dt| dt.date())
}
