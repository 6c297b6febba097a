/// Milliseconds in one second
pub const MILLIS_PER_SECOND: u64 = 1_000;
/// Milliseconds in one minute
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
/// Milliseconds in one hour
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Largest minute field of an elapsed span
pub const MAX_MINUTE_FIELD: u8 = 59;
/// Largest second field of an elapsed span
pub const MAX_SECOND_FIELD: u8 = 59;
/// Largest millisecond field of an elapsed span
pub const MAX_MILLIS_FIELD: u16 = 999;

/// Separator between hours, minutes and seconds (`HH:mm:ss.sss`)
pub const SPAN_FIELD_SEPARATOR: char = ':';
/// Separator between seconds and milliseconds (`HH:mm:ss.sss`)
pub const SPAN_FRACTION_SEPARATOR: char = '.';

/// Hours on an analog clock face
pub const CLOCK_HOURS: u32 = 12;
/// Degrees the hour hand moves per hour
pub const DEGREES_PER_HOUR: f64 = 30.0;
/// Degrees the minute hand moves per minute
pub const DEGREES_PER_MINUTE: f64 = 6.0;
/// Minutes in one hour
pub const MINUTES_PER_HOUR: u32 = 60;
/// Half turn; anything larger is a reflex angle
pub const HALF_TURN_DEGREES: f64 = 180.0;
/// Full turn
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// ISO 8601 date-time with a compact numeric offset (`+0100`)
pub(crate) const ISO_COMPACT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
/// ISO 8601 date-time with an hours-only offset (`+01`); minutes are optional
pub(crate) const ISO_HOUR_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%#z";
/// ISO 8601 alternative decimal sign for fractional seconds (`37,5`)
pub(crate) const ISO_DECIMAL_COMMA: char = ',';
/// Decimal sign chrono expects for fractional seconds
pub(crate) const ISO_DECIMAL_POINT: &str = ".";
/// ISO 8601 date-time without designator, read as UTC
pub(crate) const ISO_LOCAL_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// ISO 8601 date-time with minute precision, read as UTC
pub(crate) const ISO_LOCAL_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// ISO 8601 calendar date, read as midnight UTC
pub(crate) const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
