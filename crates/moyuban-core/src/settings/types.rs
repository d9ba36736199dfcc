use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// An hour:minute wall-clock time, stored as `"HH:MM"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map(|t| Self(t.with_second(0).unwrap_or(t)))
            .map_err(|_| format!("expected HH:MM, got '{s}'"))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Decides the statutory retirement age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn retirement_age(self) -> i32 {
        match self {
            Gender::Male => 60,
            Gender::Female => 55,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    On,
    Off,
}

impl DarkMode {
    pub fn is_on(self) -> bool {
        self == DarkMode::On
    }
}

/// Inclusive ISO weekday range (1 = Monday .. 7 = Sunday), stored as `"1-5"`.
///
/// Ranges that wrap past Sunday (e.g. `"5-1"`) are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekdayRange {
    start: u32,
    end: u32,
}

impl WeekdayRange {
    pub fn new(start: u32, end: u32) -> Result<Self, String> {
        if !(1..=7).contains(&start) || !(1..=7).contains(&end) {
            return Err(format!(
                "weekday numbers must be between 1 (Mon) and 7 (Sun), got {start}-{end}"
            ));
        }
        if start > end {
            return Err(format!(
                "weekday range {start}-{end} wraps past Sunday; use a range with start <= end"
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }
}

impl Default for WeekdayRange {
    fn default() -> Self {
        Self { start: 1, end: 5 }
    }
}

impl FromStr for WeekdayRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("expected 'start-end', got '{s}'"))?;
        let start = start
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid start weekday in '{s}'"))?;
        let end = end
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid end weekday in '{s}'"))?;
        Self::new(start, end)
    }
}

impl TryFrom<String> for WeekdayRange {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekdayRange> for String {
    fn from(value: WeekdayRange) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WeekdayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A user-named countdown target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCountdown {
    #[serde(alias = "n")]
    pub name: String,
    #[serde(alias = "d")]
    pub date: NaiveDate,
}
