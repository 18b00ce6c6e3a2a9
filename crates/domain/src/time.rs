//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ValidationError;

/// UTC timestamp used for trip start and end dates.
pub type Timestamp = DateTime<Utc>;

/// Parse a timestamp supplied by a client.
///
/// Accepts RFC 3339 (`2025-08-06T10:00:00Z`) as well as a bare calendar
/// date (`2025-08-06`), which is read as midnight UTC.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTimestamp`] naming `field` when the
/// input matches neither format.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<Timestamp, ValidationError> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.to_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ValidationError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}
