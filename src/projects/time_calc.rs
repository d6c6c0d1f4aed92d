//! 12-hour clock arithmetic.
//!
//! `add_time("11:59 PM", "24:05", Some("Wednesday"))` gives
//! `12:04 AM, Friday (2 days later)`.

use std::str::FromStr;

use crate::error::{DrillError, Result};
use crate::types::{Meridian, Weekday};

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// A wall-clock time such as `3:30 PM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub meridian: Meridian,
}

impl ClockTime {
    /// Minutes since midnight
    pub fn minutes_since_midnight(&self) -> u64 {
        let hour = u64::from(self.hour % 12);
        let hour = match self.meridian {
            Meridian::Am => hour,
            Meridian::Pm => hour + 12,
        };
        hour * MINUTES_PER_HOUR + u64::from(self.minute)
    }

    fn from_minutes(minutes: u64) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        let hour24 = minutes / MINUTES_PER_HOUR;
        let meridian = if hour24 < 12 { Meridian::Am } else { Meridian::Pm };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        Self {
            hour: hour as u32,
            minute: (minutes % MINUTES_PER_HOUR) as u32,
            meridian,
        }
    }
}

impl FromStr for ClockTime {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DrillError::parse(format!("expected a time like '3:30 PM', got '{}'", s));

        let (clock, meridian) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let meridian = Meridian::from_str(meridian.trim()).map_err(|_| invalid())?;
        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = parse_digits(hour).ok_or_else(invalid)?;
        let minute: u32 = parse_digits(minute).ok_or_else(invalid)?;

        if !(1..=12).contains(&hour) || minute >= 60 {
            return Err(invalid());
        }
        Ok(Self { hour, minute, meridian })
    }
}

/// A duration in hours and minutes, `H:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockDuration {
    pub hours: u64,
    pub minutes: u32,
}

impl ClockDuration {
    /// Length in minutes, `None` when it does not fit in a `u64`
    pub fn total_minutes(&self) -> Option<u64> {
        self.hours
            .checked_mul(MINUTES_PER_HOUR)?
            .checked_add(u64::from(self.minutes))
    }
}

impl FromStr for ClockDuration {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DrillError::parse(format!("expected a duration like '2:12', got '{}'", s));

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minutes.len() != 2 {
            return Err(invalid());
        }
        let hours: u64 = parse_digits(hours).ok_or_else(invalid)?;
        let minutes: u32 = parse_digits(minutes).ok_or_else(invalid)?;
        if minutes >= 60 {
            return Err(invalid());
        }
        Ok(Self { hours, minutes })
    }
}

fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Add `duration` to `start`, optionally tracking the weekday.
pub fn add_time(start: &str, duration: &str, day: Option<&str>) -> Result<String> {
    let start: ClockTime = start.parse()?;
    let duration: ClockDuration = duration.parse()?;
    let weekday = day
        .map(|d| Weekday::from_str(d.trim()).map_err(|_| DrillError::not_found(format!("weekday '{}'", d))))
        .transpose()?;

    let total = duration
        .total_minutes()
        .and_then(|minutes| minutes.checked_add(start.minutes_since_midnight()))
        .ok_or_else(|| DrillError::validation(format!("duration of {} hours is too long", duration.hours)))?;
    let days_later = total / MINUTES_PER_DAY;
    let end = ClockTime::from_minutes(total);

    let mut out = format!("{}:{:02} {}", end.hour, end.minute, end.meridian);
    if let Some(weekday) = weekday {
        out.push_str(&format!(", {}", weekday.advance(days_later)));
    }
    match days_later {
        0 => {}
        1 => out.push_str(" (next day)"),
        n => out.push_str(&format!(" ({} days later)", n)),
    }

    tracing::debug!(days_later, "time added");
    Ok(out)
}
