//! Text parsers for RFC 2822 and ISO 8601 date-times, plus construction from
//! epoch milliseconds.
//!
//! Both parsers trim surrounding whitespace and reject blank input with
//! [`ParseError::EmptyInput`]. A failed parse is always an `Err`; no fallback
//! date is ever produced.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::ParseError;
use crate::consts::{
    ISO_COMPACT_OFFSET_FORMAT, ISO_DATE_FORMAT, ISO_DECIMAL_COMMA, ISO_DECIMAL_POINT,
    ISO_HOUR_OFFSET_FORMAT, ISO_LOCAL_MINUTES_FORMAT, ISO_LOCAL_SECONDS_FORMAT,
};

/// Parses an RFC 2822 §3.3 date-time such as `Tue, 26 Jan 2016 13:48:02 GMT`.
///
/// The zone may be a numeric offset (`+0100`) or one of the named zones the
/// RFC defines (`GMT`, `UT`, `EST`, `PDT`, ...). The returned value keeps that
/// offset.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input and
/// `ParseError::InvalidRfc2822` when the text does not follow the grammar.
pub fn parse_rfc2822(s: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let trimmed = non_empty(s)?;

    DateTime::parse_from_rfc2822(trimmed).map_err(|err| {
        tracing::debug!(input = trimmed, error = %err, "rejected RFC 2822 date-time");
        ParseError::InvalidRfc2822 {
            input: trimmed.to_owned(),
            reason: err.to_string(),
        }
    })
}

/// Parses an ISO 8601 extended-format date-time and normalizes it to UTC.
///
/// Accepted shapes, in the order they are tried:
/// - `2016-01-19T08:07:37Z`, `2016-01-19T16:07:37.250+08:00` (RFC 3339 profile)
/// - `2016-01-19T16:07:37+0800` (compact offset)
/// - `2016-01-19T16:07:37+08` (hours-only offset)
/// - `2016-01-19T08:07:37` and `2016-01-19T08:07` (no designator, read as UTC)
/// - `2016-01-19` (midnight UTC)
///
/// A decimal comma in the seconds (`08:07:37,5Z`) is read as a decimal point.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input and
/// `ParseError::InvalidIso8601` when none of the shapes match.
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>, ParseError> {
    let trimmed = non_empty(s)?;
    let normalized = trimmed.replacen(ISO_DECIMAL_COMMA, ISO_DECIMAL_POINT, 1);

    let rfc3339_err = match DateTime::parse_from_rfc3339(&normalized) {
        Ok(date) => return Ok(date.with_timezone(&Utc)),
        Err(err) => err,
    };

    parse_iso_fallbacks(&normalized).ok_or_else(|| {
        tracing::debug!(input = trimmed, error = %rfc3339_err, "rejected ISO 8601 date-time");
        ParseError::InvalidIso8601 {
            input: trimmed.to_owned(),
            reason: rfc3339_err.to_string(),
        }
    })
}

/// Builds the UTC date-time `ms` milliseconds after 1970-01-01T00:00:00Z.
///
/// # Errors
/// Returns `ParseError::OutOfRange` if the instant is not representable.
pub fn from_epoch_millis(ms: i64) -> Result<DateTime<Utc>, ParseError> {
    DateTime::from_timestamp_millis(ms).ok_or(ParseError::OutOfRange(ms))
}

fn non_empty(s: &str) -> Result<&str, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(trimmed)
}

fn parse_iso_fallbacks(s: &str) -> Option<DateTime<Utc>> {
    if let Some(date) = [ISO_COMPACT_OFFSET_FORMAT, ISO_HOUR_OFFSET_FORMAT]
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(date.with_timezone(&Utc));
    }

    [ISO_LOCAL_SECONDS_FORMAT, ISO_LOCAL_MINUTES_FORMAT]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
