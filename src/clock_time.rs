//! Hours and minutes as the four decimal digits the display shows.

use core::fmt;

#[cfg(feature = "defmt")]
use defmt::warn;

use crate::error::Error::{self, HoursOutOfRange, MinutesOutOfRange};
use crate::shared_constants::{DIGIT_COUNT, MAX_TWO_DIGIT};
use crate::Result;

/// A time of day limited to what two pairs of digits can show.
///
/// Hours and minutes are each 0-99. Nothing checks that they form a real time of day, so
/// `ClockTime::new(88, 88)` is a valid display test pattern.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
}

impl ClockTime {
    /// Checks that both values fit in two digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HoursOutOfRange`] or [`Error::MinutesOutOfRange`] if a value is
    /// above 99.
    pub fn new(hours: u8, minutes: u8) -> Result<Self> {
        if hours > MAX_TWO_DIGIT {
            #[cfg(feature = "defmt")]
            warn!("rejecting hours {}", hours);
            return Err(HoursOutOfRange { hours });
        }
        if minutes > MAX_TWO_DIGIT {
            #[cfg(feature = "defmt")]
            warn!("rejecting minutes {}", minutes);
            return Err(MinutesOutOfRange { minutes });
        }
        Ok(Self { hours, minutes })
    }

    #[must_use]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// The four digits in display order: hour tens, hour ones, minute tens, minute ones.
    ///
    /// ```
    /// use shift_clock::ClockTime;
    ///
    /// assert_eq!(ClockTime::new(12, 34)?.digits(), [1, 2, 3, 4]);
    /// assert_eq!(ClockTime::new(7, 5)?.digits(), [0, 7, 0, 5]);
    /// # Ok::<(), shift_clock::Error>(())
    /// ```
    #[must_use]
    pub const fn digits(self) -> [u8; DIGIT_COUNT] {
        let (hour_tens, hour_ones) = split_digits(self.hours);
        let (minute_tens, minute_ones) = split_digits(self.minutes);
        [hour_tens, hour_ones, minute_tens, minute_ones]
    }
}

/// Splits a value into its tens and ones decimal digits.
#[expect(
    clippy::integer_division_remainder_used,
    reason = "Division and modulo are required for decimal digit extraction"
)]
#[must_use]
pub const fn split_digits(value: u8) -> (u8, u8) {
    ((value / 10) % 10, value % 10)
}

impl TryFrom<time::Time> for ClockTime {
    type Error = Error;

    fn try_from(time: time::Time) -> Result<Self> {
        Self::new(time.hour(), time.minute())
    }
}

/// Formats as `HH:MM`.
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn split_digits_reconstructs_every_two_digit_value() {
        for value in 0..=MAX_TWO_DIGIT {
            let (tens, ones) = split_digits(value);
            assert!(tens < 10 && ones < 10);
            assert_eq!(tens * 10 + ones, value);
        }
    }

    #[test]
    fn new_rejects_three_digit_values() {
        assert_eq!(ClockTime::new(100, 0), Err(Error::HoursOutOfRange { hours: 100 }));
        assert_eq!(
            ClockTime::new(0, 255),
            Err(Error::MinutesOutOfRange { minutes: 255 })
        );
        assert!(ClockTime::new(99, 99).is_ok());
    }

    #[test]
    fn converts_from_time_of_day() {
        let clock_time = ClockTime::try_from(time::macros::time!(23:59:30)).expect("in range");
        assert_eq!(clock_time.digits(), [2, 3, 5, 9]);
    }

    #[test]
    fn display_zero_pads() {
        let clock_time = ClockTime::new(7, 5).expect("in range");
        assert_eq!(std::format!("{clock_time}"), "07:05");
    }
}
