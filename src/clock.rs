use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::Serialize;

use crate::consts::{
    CLOCK_HOURS, DEGREES_PER_HOUR, DEGREES_PER_MINUTE, FULL_TURN_DEGREES, HALF_TURN_DEGREES,
    MINUTES_PER_HOUR,
};

/// Positions of an analog clock's hands, in degrees clockwise from 12.
///
/// The hour hand creeps forward as the minutes pass, so at 3:30 it sits
/// halfway between 3 and 4. Seconds are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClockHands {
    hour_degrees: f64,
    minute_degrees: f64,
}

impl ClockHands {
    /// Hands for `hour:minute`. Minutes past 59 carry into the hour and hours
    /// wrap at 12, so `new(15, 75)` is the same face as `new(4, 15)`.
    pub fn new(hour: u32, minute: u32) -> Self {
        let carried = (minute / MINUTES_PER_HOUR) % CLOCK_HOURS;
        let hour = f64::from((hour % CLOCK_HOURS + carried) % CLOCK_HOURS);
        let minute = f64::from(minute % MINUTES_PER_HOUR);

        Self {
            hour_degrees: (hour + minute / f64::from(MINUTES_PER_HOUR)) * DEGREES_PER_HOUR,
            minute_degrees: minute * DEGREES_PER_MINUTE,
        }
    }

    /// Hands for the UTC hour and minute of `date`.
    pub fn at<Tz: TimeZone>(date: &DateTime<Tz>) -> Self {
        let utc = date.with_timezone(&Utc);
        Self::new(utc.hour(), utc.minute())
    }

    pub const fn hour_degrees(&self) -> f64 {
        self.hour_degrees
    }

    pub const fn minute_degrees(&self) -> f64 {
        self.minute_degrees
    }

    /// Non-reflex angle between the hands, in degrees (0-180).
    pub fn angle_degrees(&self) -> f64 {
        let raw = (self.hour_degrees - self.minute_degrees).abs();
        if raw > HALF_TURN_DEGREES {
            FULL_TURN_DEGREES - raw
        } else {
            raw
        }
    }

    /// Non-reflex angle between the hands, in radians (0-π).
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees().to_radians()
    }
}

/// Angle in radians between the hour and minute hands of an analog clock
/// showing the UTC time of `date`. Always within `[0, π]`.
pub fn angle_between_clock_hands<Tz: TimeZone>(date: &DateTime<Tz>) -> f64 {
    ClockHands::at(date).angle_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    fn utc_at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 1, 26, hour, minute, 0).unwrap()
    }

    fn assert_close(actual: f64, expected: f64, context: &str) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{context}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_angle_between_clock_hands_cases() {
        struct TestCase {
            hour: u32,
            minute: u32,
            radians: f64,
        }

        let cases = [
            TestCase {
                hour: 0,
                minute: 0,
                radians: 0.0,
            },
            TestCase {
                hour: 3,
                minute: 0,
                radians: FRAC_PI_2,
            },
            TestCase {
                hour: 18,
                minute: 0,
                radians: PI,
            },
            TestCase {
                hour: 21,
                minute: 0,
                radians: FRAC_PI_2,
            },
            TestCase {
                hour: 12,
                minute: 0,
                radians: 0.0,
            },
        ];

        for case in &cases {
            let angle = angle_between_clock_hands(&utc_at(case.hour, case.minute));
            assert_close(
                angle,
                case.radians,
                &format!("{:02}:{:02}", case.hour, case.minute),
            );
        }
    }

    #[test]
    fn test_midnight_is_exactly_zero() {
        assert_eq!(angle_between_clock_hands(&utc_at(0, 0)), 0.0);
    }

    #[test]
    fn test_hour_hand_moves_with_minutes() {
        let hands = ClockHands::new(3, 30);
        assert_close(hands.hour_degrees(), 105.0, "hour hand at 3:30");
        assert_close(hands.minute_degrees(), 180.0, "minute hand at 3:30");
        assert_close(hands.angle_degrees(), 75.0, "angle at 3:30");

        assert_close(ClockHands::new(12, 30).angle_degrees(), 165.0, "angle at 12:30");
        assert_close(ClockHands::new(9, 45).angle_degrees(), 22.5, "angle at 9:45");
    }

    #[test]
    fn test_reflex_angle_is_folded() {
        // Raw difference is 270 degrees
        let hands = ClockHands::new(9, 0);
        assert_close(hands.angle_degrees(), 90.0, "angle at 9:00");
    }

    #[test]
    fn test_uses_utc_fields() {
        // 03:00 UTC seen from +05:30 is 08:30 local
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let local = utc_at(3, 0).with_timezone(&offset);
        assert_close(angle_between_clock_hands(&local), FRAC_PI_2, "03:00 UTC");
    }

    #[test]
    fn test_seconds_are_ignored() {
        let with_seconds = Utc.with_ymd_and_hms(2016, 1, 26, 3, 0, 59).unwrap();
        assert_eq!(
            angle_between_clock_hands(&with_seconds),
            angle_between_clock_hands(&utc_at(3, 0))
        );
    }

    #[test]
    fn test_minutes_carry_into_hours() {
        assert_eq!(ClockHands::new(15, 75), ClockHands::new(4, 15));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ClockHands::new(3, 0)).unwrap();
        assert_eq!(json, r#"{"hour_degrees":90.0,"minute_degrees":0.0}"#);
    }

    proptest! {
        #[test]
        fn test_angle_is_non_reflex(hour in 0u32..24, minute in 0u32..60) {
            let angle = angle_between_clock_hands(&utc_at(hour, minute));
            prop_assert!((0.0..=PI).contains(&angle));
        }

        #[test]
        fn test_angle_repeats_every_twelve_hours(hour in 0u32..12, minute in 0u32..60) {
            prop_assert_eq!(
                angle_between_clock_hands(&utc_at(hour, minute)),
                angle_between_clock_hands(&utc_at(hour + 12, minute))
            );
        }
    }
}
