//! Today's and this week's elapsed share.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

use super::format::{format_remaining, window_pct};
use crate::settings::{ClockTime, WeekdayRange};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkdayProgress {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Elapsed share, 0..=100.
    pub percent: f64,
    /// Time left until `end`.
    pub remaining: String,
}

/// Progress through `[start, end]` on the day of `now`.
pub fn workday(now: NaiveDateTime, start: ClockTime, end: ClockTime) -> WorkdayProgress {
    let today = now.date();
    let start = today.and_time(start.time());
    let end = today.and_time(end.time());
    WorkdayProgress {
        start,
        end,
        percent: window_pct(now, start, end),
        remaining: format_remaining(end - now),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekProgress {
    /// 00:00:00 on the first working weekday.
    pub start: NaiveDateTime,
    /// 23:59:59 on the last working weekday.
    pub end: NaiveDateTime,
    pub percent: f64,
    pub remaining_percent: f64,
}

/// Progress through the working days of the ISO week containing `now`.
pub fn week(now: NaiveDateTime, range: WeekdayRange) -> WeekProgress {
    let today = now.date();
    let day = i64::from(now.weekday().number_from_monday());
    let first = today - Duration::days(day - i64::from(range.start()));
    let last = today + Duration::days(i64::from(range.end()) - day);

    let start = first.and_time(NaiveTime::MIN);
    let end = last.and_time(end_of_day());
    let percent = window_pct(now, start, end);
    WeekProgress {
        start,
        end,
        percent,
        remaining_percent: 100.0 - percent,
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}
