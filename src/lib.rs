//! Small, independent date/time calculations on top of [`chrono`].
//!
//! - [`parse_rfc2822`] and [`parse_iso8601`] turn text into date-times.
//! - [`is_leap_year`] applies the Gregorian leap-year rule.
//! - [`time_span_to_string`] formats elapsed time as `HH:mm:ss.sss`.
//! - [`angle_between_clock_hands`] solves the clock angle problem.
//!
//! Every function is pure: the same inputs always give the same output.

mod calendar;
mod clock;
mod consts;
mod parse;
mod prelude;
mod span;

pub use calendar::{is_leap_year, year_is_leap};
pub use clock::{ClockHands, angle_between_clock_hands};
pub use consts::*;
pub use parse::{from_epoch_millis, parse_iso8601, parse_rfc2822};
pub use span::{SpanError, TimeSpan, time_span_to_string};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid RFC 2822 date-time {input:?}: {reason}")]
    InvalidRfc2822 { input: String, reason: String },
    #[display(fmt = "Invalid ISO 8601 date-time {input:?}: {reason}")]
    InvalidIso8601 { input: String, reason: String },
    #[display(fmt = "Epoch milliseconds out of range: {_0}")]
    OutOfRange(i64),
}

impl std::error::Error for ParseError {}
