//! Strict fixed-pattern date and date-time conversion.
//!
//! Two textual shapes are supported: `YYYY-MM-DD` for dates and
//! `YYYY-MM-DD HH:MM:SS` for date-times (24-hour clock, whole seconds).
//! Parsing is strict: every field must be zero-padded to its full width and
//! separators must match exactly, so `2025-1-1` is rejected rather than
//! corrected. Malformed or missing input is an absent value, never an error.

use chrono::{NaiveDate, NaiveDateTime};

/// Pattern used to render dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Pattern used to render date-times.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_LEN: usize = 10; // YYYY-MM-DD
const DATE_TIME_LEN: usize = 19; // YYYY-MM-DD HH:MM:SS

/// Parse `YYYY-MM-DD` text into a calendar date.
///
/// Surrounding whitespace is trimmed first. Absent, empty, or whitespace-only
/// input yields `None`, as does any deviation from the pattern: wrong
/// separators, unpadded fields, out-of-range month or day, extra characters.
pub fn parse_date(text: Option<&str>) -> Option<NaiveDate> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    let bytes = text.as_bytes();
    if bytes.len() != DATE_LEN {
        return None;
    }
    date_from_bytes(bytes)
}

/// Parse `YYYY-MM-DD HH:MM:SS` text into a calendar date-time.
///
/// Same contract as [`parse_date`]: trimmed, strict widths, absent on any
/// mismatch. The date and time parts must be separated by a single space.
pub fn parse_date_time(text: Option<&str>) -> Option<NaiveDateTime> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    let bytes = text.as_bytes();
    if bytes.len() != DATE_TIME_LEN || bytes[10] != b' ' {
        return None;
    }
    let date = date_from_bytes(&bytes[..DATE_LEN])?;
    if bytes[13] != b':' || bytes[16] != b':' {
        return None;
    }
    let hour = fixed_digits(bytes, 11, 2)?;
    let minute = fixed_digits(bytes, 14, 2)?;
    let second = fixed_digits(bytes, 17, 2)?;
    date.and_hms_opt(hour, minute, second)
}

/// Render a calendar date as `YYYY-MM-DD`, zero-padded.
///
/// Absent input yields the empty string. Never fails.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Render a calendar date-time as `YYYY-MM-DD HH:MM:SS`, zero-padded.
///
/// Absent input yields the empty string. Never fails.
pub fn format_date_time(date_time: Option<NaiveDateTime>) -> String {
    match date_time {
        Some(date_time) => date_time.format(DATE_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Read a full `YYYY-MM-DD` slice (exactly [`DATE_LEN`] bytes).
///
/// Width and separator checks happen here; calendar range rules (month
/// 01-12, day bounded by month and leap year) come from chrono's checked
/// constructor.
fn date_from_bytes(bytes: &[u8]) -> Option<NaiveDate> {
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let year = fixed_digits(bytes, 0, 4)?;
    let month = fixed_digits(bytes, 5, 2)?;
    let day = fixed_digits(bytes, 8, 2)?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Read exactly `width` ASCII digits starting at `start`.
fn fixed_digits(bytes: &[u8], start: usize, width: usize) -> Option<u32> {
    let field = bytes.get(start..start + width)?;
    let mut value = 0u32;
    for &b in field {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(b - b'0');
    }
    Some(value)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
