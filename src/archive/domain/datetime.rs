//! XEP-0082 date-time profile helpers.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;
use thiserror::Error;

/// Error returned when a timestamp is not a valid XEP-0082 date-time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date-time '{input}': {reason}")]
pub struct DateTimeParseError {
    input: String,
    reason: String,
}

/// Formats an instant as `YYYY-MM-DDThh:mm:ss.sssZ`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use scrollkeeper::archive::domain::format_xmpp_datetime;
///
/// let start = Utc.with_ymd_and_hms(1469, 7, 21, 2, 56, 15).single().expect("valid time");
/// assert_eq!(format_xmpp_datetime(start), "1469-07-21T02:56:15.000Z");
/// ```
#[must_use]
pub fn format_xmpp_datetime(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a date-time with any offset and fractional precision into UTC.
///
/// # Errors
///
/// Returns [`DateTimeParseError`] if the input is not RFC 3339.
pub fn parse_xmpp_datetime(input: &str) -> Result<DateTime<Utc>, DateTimeParseError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|error| DateTimeParseError {
            input: input.to_owned(),
            reason: error.to_string(),
        })
}

/// Serialises an instant in XEP-0082 form.
pub(crate) fn serialize_xmpp_datetime<S>(
    instant: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_xmpp_datetime(*instant))
}
