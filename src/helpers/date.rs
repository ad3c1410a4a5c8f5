//! Date helper functions

use chrono::{DateTime, NaiveDate, TimeZone};

/// Format used for dates shown to readers, e.g. "Jan 15, 2026"
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Parse a frontmatter date written strictly as `YYYY-MM-DD`
pub fn parse_ymd(s: &str) -> Option<NaiveDate> {
    // chrono accepts single-digit months and days, frontmatter dates must not use them
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Format a calendar date for display
///
/// # Examples
/// ```ignore
/// display_date(&NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()) // -> "Jan 15, 2026"
/// ```
pub fn display_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format a timestamp for display in its own timezone
pub fn display_datetime<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(DISPLAY_FORMAT).to_string()
}
