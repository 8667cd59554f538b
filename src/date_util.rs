//! Calendar-day helpers on the process-local timezone.

use chrono::{Duration, Local, NaiveDate};

/// The current calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The calendar day before [`today`].
pub fn yesterday() -> NaiveDate {
    days_before(1)
}

/// `days` calendar days before [`today`].
pub fn days_before(days: i64) -> NaiveDate {
    days_before_from(days, today())
}

/// `days` calendar days before `from`.
pub fn days_before_from(days: i64, from: NaiveDate) -> NaiveDate {
    from - Duration::days(days)
}

/// Coerce a date-ish string into canonical `YYYY-MM-DD` form.
///
/// Accepts a plain calendar day or an RFC 3339 timestamp (the date part is
/// kept). Unparseable input is passed through unchanged.
pub fn normalize(input: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.to_string();
    }
    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(input) {
        return datetime.date_naive().to_string();
    }
    input.to_string()
}
