use std::{str::FromStr, time::Duration};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    consts::{
        MAX_MILLIS_FIELD, MAX_MINUTE_FIELD, MAX_SECOND_FIELD, MILLIS_PER_HOUR, MILLIS_PER_MINUTE,
        MILLIS_PER_SECOND, SPAN_FIELD_SEPARATOR, SPAN_FRACTION_SEPARATOR,
    },
    prelude::*,
};

/// Elapsed time between two instants, split into `HH:mm:ss.sss` fields.
///
/// Hours are unbounded, so a span of 26 hours displays as `26:00:00.000`.
/// Field order matches magnitude, so the derived ordering is the ordering of
/// the total duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")]
pub struct TimeSpan {
    hours: u64,
    minutes: u8,
    seconds: u8,
    millis: u16,
}

/// Error type for elapsed-time operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// End instant is before the start instant.
    #[error("Negative time span: end is {} ms before start", .millis.unsigned_abs())]
    Negative { millis: i64 },

    /// A field exceeds its maximum.
    #[error("Invalid {field}: {value} (must be 0-{max})")]
    FieldOutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    /// Text is not in `HH:mm:ss.sss` form.
    #[error("Invalid time span format: {0}")]
    InvalidFormat(String),
}

impl TimeSpan {
    /// Creates a span from its fields.
    ///
    /// # Errors
    /// Returns `SpanError::FieldOutOfRange` if minutes or seconds exceed 59,
    /// millis exceeds 999, or the total would not fit in a `u64` of milliseconds.
    pub fn new(hours: u64, minutes: u8, seconds: u8, millis: u16) -> Result<Self, SpanError> {
        check_field("minutes", u64::from(minutes), u64::from(MAX_MINUTE_FIELD))?;
        check_field("seconds", u64::from(seconds), u64::from(MAX_SECOND_FIELD))?;
        check_field("millis", u64::from(millis), u64::from(MAX_MILLIS_FIELD))?;

        let below_hour = u64::from(minutes) * MILLIS_PER_MINUTE
            + u64::from(seconds) * MILLIS_PER_SECOND
            + u64::from(millis);
        check_field("hours", hours, (u64::MAX - below_hour) / MILLIS_PER_HOUR)?;

        Ok(Self {
            hours,
            minutes,
            seconds,
            millis,
        })
    }

    /// Splits a millisecond total into fields by integer division.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_millis(total: u64) -> Self {
        // Each remainder is below its field's limit, so the casts are lossless.
        Self {
            hours: total / MILLIS_PER_HOUR,
            minutes: ((total % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u8,
            seconds: ((total % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u8,
            millis: (total % MILLIS_PER_SECOND) as u16,
        }
    }

    /// Elapsed time from `start` to `end`, truncated to whole milliseconds.
    ///
    /// # Errors
    /// Returns `SpanError::Negative` if `end` is before `start`, even by less
    /// than a millisecond. Its `millis` is the difference rounded down.
    pub fn between<Tz1, Tz2>(
        start: &DateTime<Tz1>,
        end: &DateTime<Tz2>,
    ) -> Result<Self, SpanError>
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        let delta = end.with_timezone(&Utc) - start.with_timezone(&Utc);
        let truncated = delta.num_milliseconds();
        tracing::trace!(millis = truncated, "computed elapsed time");

        if delta < TimeDelta::zero() {
            // Round down so a sub-millisecond reversal still reports -1 ms
            let millis = if delta < TimeDelta::milliseconds(truncated) {
                truncated - 1
            } else {
                truncated
            };
            tracing::debug!(millis, "end is before start");
            return Err(SpanError::Negative { millis });
        }

        Ok(Self::from_millis(truncated.unsigned_abs()))
    }

    /// Whole hours, not wrapped at 24
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    /// Minutes past the hour (0-59)
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds past the minute (0-59)
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Milliseconds past the second (0-999)
    pub const fn millis(&self) -> u16 {
        self.millis
    }

    /// Total length of the span in milliseconds.
    pub const fn total_millis(&self) -> u64 {
        self.hours * MILLIS_PER_HOUR
            + self.minutes as u64 * MILLIS_PER_MINUTE
            + self.seconds as u64 * MILLIS_PER_SECOND
            + self.millis as u64
    }
}

/// Formats the time elapsed from `start` to `end` as `HH:mm:ss.sss`.
///
/// # Errors
/// Returns `SpanError::Negative` if `end` is before `start`.
pub fn time_span_to_string<Tz1, Tz2>(
    start: &DateTime<Tz1>,
    end: &DateTime<Tz2>,
) -> Result<String, SpanError>
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    TimeSpan::between(start, end).map(|span| span.to_string())
}

fn check_field(field: &'static str, value: u64, max: u64) -> Result<(), SpanError> {
    if value > max {
        return Err(SpanError::FieldOutOfRange { field, value, max });
    }
    Ok(())
}

/// Parses a field made only of ASCII digits, with an exact or minimum width.
fn parse_digits<T: FromStr>(
    s: &str,
    width: usize,
    exact: bool,
    input: &str,
) -> Result<T, SpanError> {
    let width_ok = if exact { s.len() == width } else { s.len() >= width };
    if !width_ok || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SpanError::InvalidFormat(input.to_owned()));
    }
    s.parse::<T>().map_err(|_| SpanError::InvalidFormat(input.to_owned()))
}

impl From<TimeSpan> for Duration {
    fn from(span: TimeSpan) -> Self {
        Self::from_millis(span.total_millis())
    }
}

impl FromStr for TimeSpan {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let (clock, fraction) = trimmed
            .split_once(SPAN_FRACTION_SEPARATOR)
            .ok_or_else(|| SpanError::InvalidFormat(s.to_owned()))?;

        let parts: Vec<&str> = clock.split(SPAN_FIELD_SEPARATOR).collect();
        let [hours, minutes, seconds] = parts.as_slice() else {
            return Err(SpanError::InvalidFormat(s.to_owned()));
        };

        let hours = parse_digits::<u64>(hours, 2, false, s)?;
        let minutes = parse_digits::<u8>(minutes, 2, true, s)?;
        let seconds = parse_digits::<u8>(seconds, 2, true, s)?;
        let millis = parse_digits::<u16>(fraction, 3, true, s)?;

        Self::new(hours, minutes, seconds, millis)
    }
}

impl Serialize for TimeSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
