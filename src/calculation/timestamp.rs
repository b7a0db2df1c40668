//! Timestamp parsing.
//!
//! Stored shift records carry timestamps as text. Anything with an explicit
//! offset (RFC 3339, including the `Z` suffix) names an absolute instant.
//! Timestamps without an offset are read as civil time in the organisation's
//! timezone.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};

/// Accepted layouts for timestamps without an offset.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses a timestamp into an absolute instant.
///
/// # Arguments
///
/// * `value` - RFC 3339 text, or a naive ISO-8601 date-time
/// * `timezone` - Zone used to interpret naive date-times
///
/// # Errors
///
/// Returns [`EngineError::UnparseableTimestamp`] if the text matches no
/// accepted layout, or names a civil time skipped by a daylight-saving
/// transition. A civil time repeated by a transition resolves to its earlier
/// instant.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use chrono_tz::Pacific::Auckland;
/// use timeclock_engine::calculation::parse_timestamp;
///
/// let explicit = parse_timestamp("2024-03-01T09:00:00+13:00", &Auckland).unwrap();
/// let naive = parse_timestamp("2024-03-01T09:00:00", &Auckland).unwrap();
/// assert_eq!(explicit, naive);
/// assert_eq!(explicit, Utc.with_ymd_and_hms(2024, 2, 29, 20, 0, 0).unwrap());
/// ```
pub fn parse_timestamp(value: &str, timezone: &Tz) -> EngineResult<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| unparseable(value, "expected RFC 3339 or YYYY-MM-DDTHH:MM[:SS]"))?;

    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(unparseable(
            value,
            &format!("local time does not exist in {}", timezone.name()),
        )),
    }
}

fn unparseable(value: &str, message: &str) -> EngineError {
    EngineError::UnparseableTimestamp {
        value: value.to_string(),
        message: message.to_string(),
    }
}
