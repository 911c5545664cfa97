//! Date helper functions

use chrono::{DateTime, TimeZone};

use crate::content::parse_date_string;

/// Format a date with a chrono format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "%B %-d, %Y") // -> "January 15, 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(format).to_string()
}

/// Format a raw header date for display
///
/// Dates that cannot be parsed are shown as written.
pub fn display_date(raw: &str, format: &str) -> String {
    match parse_date_string(raw) {
        Some(date) => format_date(&date, format),
        None => raw.to_string(),
    }
}
