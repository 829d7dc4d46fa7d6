//! Date and time formatting for the activity log and session info.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Format a UTC timestamp as local `DD.MM.YYYY HH:MM`
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string()
}

/// Format an ISO date string (`YYYY-MM-DD`, optionally followed by a time)
/// as `DD.MM.YYYY`. Anything else is returned unchanged.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
