//! Helpers for input validation and conversion.
//!
//! They centralize normalization so every engine operation enforces the same
//! invariants on user ids, free text and dates.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{EngineError, ResultEngine};

/// Parse an expense date.
///
/// Accepts a plain `YYYY-MM-DD` calendar date or an RFC 3339 timestamp.
/// Timestamps are converted to UTC before the calendar date is taken, so
/// `2025-01-31T23:30:00-02:00` is stored as `2025-02-01`.
pub fn parse_calendar_date(value: &str) -> ResultEngine<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| EngineError::InvalidDate(format!("invalid date: {value}")))
}

/// Trim a required identifier and reject blank values.
pub(crate) fn normalize_user_id(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(
            "user id must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}
