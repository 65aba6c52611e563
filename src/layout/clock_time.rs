//! Clock times on a 12-hour dial

use super::error::{LayoutError, Result};
use super::MINUTES_PER_HALF_DAY;
use std::str::FromStr;

/// A time shown by one clock face: hour `0..12`, minute `0..60`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour >= 12 || minute >= 60 {
            return Err(LayoutError::InvalidTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    /// Time for minute `m` of the half day (0 = 12:00)
    pub fn from_minute_of_half_day(m: usize) -> Result<Self> {
        if m >= MINUTES_PER_HALF_DAY {
            return Err(LayoutError::InvalidTime(format!("minute {}", m)));
        }
        Ok(Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
        })
    }

    pub fn minute_of_half_day(&self) -> usize {
        self.hour as usize * 60 + self.minute as usize
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

/// Dial notation: hour 0 is shown as 12
impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hour = if self.hour == 0 { 12 } else { self.hour };
        write!(f, "{}:{:02}", hour, self.minute)
    }
}

/// Parses `h:mm` with `h` in `1..=12`; `0` is accepted as an alias of `12`
impl FromStr for ClockTime {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LayoutError::InvalidTime(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        if hour > 12 {
            return Err(invalid());
        }

        Self::new(hour % 12, minute).map_err(|_| invalid())
    }
}
