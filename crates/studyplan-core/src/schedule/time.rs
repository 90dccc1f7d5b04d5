//! Clock times within a single 24-hour day.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A zero-padded "HH:MM" clock time within one 24-hour day.
///
/// Ordering matches lexicographic ordering of the string form, so sorting
/// schedules by `TimeOfDay` agrees with sorting the serialized strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes_since_midnight: u16,
}

impl TimeOfDay {
    /// Create a time from hour and minute components.
    ///
    /// # Panics
    /// Panics if `hour > 23` or `minute > 59`. Use [`parse`](Self::parse)
    /// for a non-panicking version.
    pub fn new(hour: u16, minute: u16) -> Self {
        assert!(
            hour < 24 && minute < 60,
            "TimeOfDay::new: {hour}:{minute} out of range"
        );
        Self {
            minutes_since_midnight: hour * 60 + minute,
        }
    }

    /// Parse a zero-padded 24-hour "HH:MM" string.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTimeFormat`] for anything else.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTimeFormat(s.to_string());

        let (hour_part, minute_part) = s.split_once(':').ok_or_else(invalid)?;
        if hour_part.len() != 2
            || minute_part.len() != 2
            || !hour_part.bytes().all(|b| b.is_ascii_digit())
            || !minute_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour: u16 = hour_part.parse().map_err(|_| invalid())?;
        let minute: u16 = minute_part.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self {
            minutes_since_midnight: hour * 60 + minute,
        })
    }

    pub fn hour(&self) -> u16 {
        self.minutes_since_midnight / 60
    }

    pub fn minute(&self) -> u16 {
        self.minutes_since_midnight % 60
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes_since_midnight
    }

    /// Add minutes, saturating at 23:59. All schedule arithmetic stays
    /// within one day, so the saturation point is unreachable through the
    /// public generation API.
    pub fn add_minutes(self, minutes: u32) -> Self {
        let total = self.minutes_since_midnight as u32 + minutes;
        Self {
            minutes_since_midnight: total.min(MINUTES_PER_DAY as u32 - 1) as u16,
        }
    }

    /// Whole minutes from `self` until `later`, or 0 if `later` is not
    /// actually later.
    pub fn minutes_until(self, later: TimeOfDay) -> u32 {
        later
            .minutes_since_midnight
            .saturating_sub(self.minutes_since_midnight) as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert_eq!(TimeOfDay::parse("00:00").unwrap(), TimeOfDay::new(0, 0));
        assert_eq!(TimeOfDay::parse("09:05").unwrap(), TimeOfDay::new(9, 5));
        assert_eq!(TimeOfDay::parse("23:59").unwrap(), TimeOfDay::new(23, 59));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in ["9:00", "09:0", "24:00", "09:60", "0900", "ab:cd", "", "09:00:00"] {
            assert!(
                TimeOfDay::parse(input).is_err(),
                "expected \"{input}\" to be rejected"
            );
        }
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(9, 5).to_string(), "09:05");
        assert_eq!(TimeOfDay::new(16, 30).to_string(), "16:30");
    }

    #[test]
    fn ordering_matches_string_ordering() {
        let times = [
            TimeOfDay::new(8, 59),
            TimeOfDay::new(9, 0),
            TimeOfDay::new(10, 30),
            TimeOfDay::new(16, 0),
        ];
        for pair in times.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].to_string() < pair[1].to_string());
        }
    }

    #[test]
    fn add_minutes_carries_hours() {
        let time = TimeOfDay::new(11, 15).add_minutes(45);
        assert_eq!(time, TimeOfDay::new(12, 0));
    }

    #[test]
    fn add_minutes_saturates_at_end_of_day() {
        let time = TimeOfDay::new(23, 30).add_minutes(90);
        assert_eq!(time, TimeOfDay::new(23, 59));
    }

    #[test]
    fn minutes_until_is_zero_for_earlier_times() {
        let start = TimeOfDay::new(15, 0);
        let end = TimeOfDay::new(16, 0);
        assert_eq!(start.minutes_until(end), 60);
        assert_eq!(end.minutes_until(start), 0);
    }

    #[test]
    fn serde_uses_string_form() {
        let time = TimeOfDay::new(16, 30);
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"16:30\"");
        let decoded: TimeOfDay = serde_json::from_str("\"07:45\"").unwrap();
        assert_eq!(decoded, TimeOfDay::new(7, 45));
        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }
}
