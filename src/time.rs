//! Time sampling
//!
//! Turns a wall-clock reading into the fields the clock face draws.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use crate::app::DisplayOptions;
use crate::error::Result;
use crate::glyph::Digit;

/// Meridiem label shown when the twelve-hour format is off
pub const NO_MERIDIEM: &str = " ";

/// Source of wall-clock readings
pub trait TimeSource {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A time fixed at construction, for deterministic rendering
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// One tick's worth of display fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledTime {
    pub hour: [Digit; 2],
    pub minute: [Digit; 2],
    /// Only sampled while seconds are shown
    pub second: Option<[Digit; 2]>,
    pub month_day: u32,
    /// 1-based month
    pub month: u32,
    pub year: i32,
    pub meridiem: &'static str,
}

impl SampledTime {
    /// Text of the date line under the frame, e.g. `02/01/2024 (AM)`
    ///
    /// A blank meridiem leaves a single trailing space.
    pub fn date_line(&self) -> String {
        format!(
            "{:02}/{:02}/{} {}",
            self.month_day,
            self.month,
            self.year,
            self.meridiem.trim()
        )
    }
}

/// Hour as displayed, plus its meridiem label
///
/// In twelve-hour mode only hours strictly after noon count as PM, so 12:xx
/// is labelled "(AM)". Midnight is shown as 12.
pub fn display_hour(raw_hour: u32, twelve_hour: bool) -> (u32, &'static str) {
    if !twelve_hour {
        return (raw_hour, NO_MERIDIEM);
    }
    let meridiem = if raw_hour > 12 { "(PM)" } else { "(AM)" };
    let hour = match raw_hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    (hour, meridiem)
}

/// Decompose `now` into display fields according to `options`
pub fn sample(now: &NaiveDateTime, options: &DisplayOptions) -> Result<SampledTime> {
    let (hour, meridiem) = display_hour(now.hour(), options.twelve_hour);

    let second = if options.show_seconds {
        Some(Digit::pair(now.second())?)
    } else {
        None
    };

    Ok(SampledTime {
        hour: Digit::pair(hour)?,
        minute: Digit::pair(now.minute())?,
        second,
        month_day: now.day(),
        month: now.month(),
        year: now.year(),
        meridiem,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn values(pair: [Digit; 2]) -> (u8, u8) {
        (pair[0].value(), pair[1].value())
    }

    #[test]
    fn test_twenty_four_hour_is_identity() {
        for h in 0..24 {
            assert_eq!(display_hour(h, false), (h, NO_MERIDIEM));
        }
    }

    #[test]
    fn test_twelve_hour_midnight() {
        assert_eq!(display_hour(0, true), (12, "(AM)"));
    }

    #[test]
    fn test_twelve_hour_afternoon() {
        assert_eq!(display_hour(13, true), (1, "(PM)"));
        assert_eq!(display_hour(23, true), (11, "(PM)"));
    }

    #[test]
    fn test_twelve_hour_noon_is_labelled_am() {
        // Only hours after 12 are PM
        assert_eq!(display_hour(12, true), (12, "(AM)"));
    }

    #[test]
    fn test_twelve_hour_morning_unchanged() {
        for h in 1..12 {
            assert_eq!(display_hour(h, true), (h, "(AM)"));
        }
    }

    #[test]
    fn test_sample_default_options() {
        let options = DisplayOptions::default();
        let sampled = sample(&at(9, 5, 3), &options).unwrap();

        assert_eq!(values(sampled.hour), (0, 9));
        assert_eq!(values(sampled.minute), (0, 5));
        assert_eq!(sampled.second, None);
        assert_eq!(sampled.month_day, 2);
        assert_eq!(sampled.month, 1);
        assert_eq!(sampled.year, 2024);
        assert_eq!(sampled.date_line(), "02/01/2024 ");
    }

    #[test]
    fn test_sample_with_seconds() {
        let options = DisplayOptions {
            show_seconds: true,
            ..Default::default()
        };
        let sampled = sample(&at(9, 5, 47), &options).unwrap();
        assert_eq!(sampled.second.map(values), Some((4, 7)));
    }

    #[test]
    fn test_sample_twelve_hour() {
        let options = DisplayOptions {
            twelve_hour: true,
            ..Default::default()
        };
        let sampled = sample(&at(21, 30, 0), &options).unwrap();
        assert_eq!(values(sampled.hour), (0, 9));
        assert_eq!(sampled.meridiem, "(PM)");
        assert_eq!(sampled.date_line(), "02/01/2024 (PM)");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(at(1, 2, 3));
        assert_eq!(clock.now(), at(1, 2, 3));
    }
}
