//! Event date display

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%b %-d %Y";

/// Format a conference's event dates, e.g. `"Jan 1 2020 - Jan 3 2020"`
///
/// Returns `None` without a start date. Dates falling on the same calendar
/// day (UTC) collapse to a single date; time of day is ignored.
pub fn format_event_dates(
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
) -> Option<String> {
    let starts_at = starts_at?;
    let start = starts_at.format(DATE_FORMAT).to_string();

    match ends_at {
        Some(ends_at) if ends_at.date_naive() != starts_at.date_naive() => {
            Some(format!("{start} - {}", ends_at.format(DATE_FORMAT)))
        }
        _ => Some(start),
    }
}
