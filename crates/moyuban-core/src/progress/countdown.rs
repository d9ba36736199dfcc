//! Countdowns: weekend, payday, custom dates and fixed holidays.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use super::format::{days_ceil, format_remaining};
use crate::settings::{CustomCountdown, MAX_CUSTOM};

/// A duration countdown to a fixed instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub target: NaiveDateTime,
    pub remaining: String,
}

impl Countdown {
    fn until(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        Self {
            target,
            remaining: format_remaining(target - now),
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    first_of_month(first + Duration::days(31)) - Duration::days(1)
}

/// Resolve `day` within the month starting at `first`. Days past the end of
/// the month run on into the next one; a day beyond the calendar's range
/// falls back to the month's last day.
fn day_in_month(first: NaiveDate, day: u32) -> NaiveDate {
    first
        .checked_add_signed(Duration::days(i64::from(day) - 1))
        .unwrap_or_else(|| last_of_month(first))
}

/// Time until next Saturday 00:00. On Saturday itself this is already due.
pub fn weekend(now: NaiveDateTime) -> Countdown {
    let from_sunday = i64::from(now.weekday().num_days_from_sunday());
    let offset = (6 - from_sunday) % 7;
    Countdown::until(now, midnight(now.date() + Duration::days(offset)))
}

/// Time until the next `salary_day`, this month or the next.
pub fn payday(now: NaiveDateTime, salary_day: u32) -> Countdown {
    let this_month = first_of_month(now.date());
    let mut target = midnight(day_in_month(this_month, salary_day));
    if now > target {
        let next_month = first_of_month(this_month + Duration::days(31));
        target = midnight(day_in_month(next_month, salary_day));
    }
    Countdown::until(now, target)
}

/// One of the five custom countdown slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum CustomSlot {
    Set {
        slot: usize,
        name: String,
        date: NaiveDate,
        days_left: i64,
    },
    Unset {
        slot: usize,
    },
}

/// Day counts for every custom slot; slots past the configured list are unset.
/// Dates count down to local midnight, not UTC midnight.
pub fn custom(now: NaiveDateTime, entries: &[CustomCountdown]) -> Vec<CustomSlot> {
    (0..MAX_CUSTOM)
        .map(|i| match entries.get(i) {
            Some(entry) => CustomSlot::Set {
                slot: i + 1,
                name: entry.name.clone(),
                date: entry.date,
                days_left: days_ceil(now, midnight(entry.date)),
            },
            None => CustomSlot::Unset { slot: i + 1 },
        })
        .collect()
}

/// A named fixed calendar holiday.
#[derive(Debug, Clone, Copy)]
pub struct Holiday {
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
}

pub const HOLIDAYS: [Holiday; 5] = [
    Holiday { name: "元旦", month: 1, day: 1 },
    Holiday { name: "春节", month: 2, day: 1 },
    Holiday { name: "清明节", month: 4, day: 4 },
    Holiday { name: "劳动节", month: 5, day: 1 },
    Holiday { name: "国庆节", month: 10, day: 1 },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayCountdown {
    pub name: &'static str,
    pub date: NaiveDate,
    pub days_left: i64,
}

/// Days until each holiday's next occurrence. A holiday whose midnight has
/// already passed this year counts toward next year's.
pub fn holidays(now: NaiveDateTime) -> Vec<HolidayCountdown> {
    HOLIDAYS
        .iter()
        .filter_map(|h| {
            let mut date = NaiveDate::from_ymd_opt(now.year(), h.month, h.day)?;
            if midnight(date) < now {
                date = NaiveDate::from_ymd_opt(now.year() + 1, h.month, h.day)?;
            }
            Some(HolidayCountdown {
                name: h.name,
                date,
                days_left: days_ceil(now, midnight(date)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap()
    }

    #[test]
    fn weekend_from_wednesday() {
        let c = weekend(on(2024, 5, 8, 12, 0));
        assert_eq!(c.target, on(2024, 5, 11, 0, 0));
        assert_eq!(c.remaining, "2天12小时0分钟");
    }

    #[test]
    fn weekend_on_saturday_has_arrived() {
        let c = weekend(on(2024, 5, 11, 9, 0));
        assert_eq!(c.target, on(2024, 5, 11, 0, 0));
        assert_eq!(c.remaining, "已到");
    }

    #[test]
    fn weekend_from_sunday_is_six_days_out() {
        let c = weekend(on(2024, 5, 12, 0, 0));
        assert_eq!(c.target, on(2024, 5, 18, 0, 0));
        assert_eq!(c.remaining, "6天0小时0分钟");
    }

    #[test]
    fn payday_later_this_month() {
        let c = payday(on(2024, 5, 8, 12, 0), 20);
        assert_eq!(c.target, on(2024, 5, 20, 0, 0));
    }

    #[test]
    fn payday_rolls_to_next_month() {
        let c = payday(on(2024, 5, 25, 12, 0), 20);
        assert_eq!(c.target, on(2024, 6, 20, 0, 0));
        let c = payday(on(2024, 12, 25, 12, 0), 20);
        assert_eq!(c.target, on(2025, 1, 20, 0, 0));
    }

    #[test]
    fn payday_at_exact_midnight_is_today() {
        let c = payday(on(2024, 5, 20, 0, 0), 20);
        assert_eq!(c.target, on(2024, 5, 20, 0, 0));
        assert_eq!(c.remaining, "已到");
    }

    #[test]
    fn payday_overflowing_day_runs_into_next_month() {
        // 31 February 2024 is 2 March.
        let c = payday(on(2024, 2, 10, 12, 0), 31);
        assert_eq!(c.target, on(2024, 3, 2, 0, 0));
    }

    #[test]
    fn payday_with_unrepresentable_day_uses_month_end() {
        let now = on(2024, 5, 8, 12, 0);
        let c = payday(now, 1_000_000_000);
        assert_eq!(c.target, on(2024, 5, 31, 0, 0));

        let c = payday(on(2024, 5, 31, 9, 0), u32::MAX);
        assert_eq!(c.target, on(2024, 6, 30, 0, 0));
    }

    #[test]
    fn payday_far_but_representable_day_runs_on() {
        let c = payday(on(2024, 5, 8, 12, 0), 367);
        assert_eq!(c.target, on(2025, 5, 2, 0, 0));
    }

    #[test]
    fn custom_slots_fill_to_five() {
        let entries = vec![CustomCountdown {
            name: "Trip".into(),
            date: date(2024, 5, 10),
        }];
        let slots = custom(on(2024, 5, 8, 12, 0), &entries);
        assert_eq!(slots.len(), MAX_CUSTOM);
        assert_eq!(
            slots[0],
            CustomSlot::Set {
                slot: 1,
                name: "Trip".into(),
                date: date(2024, 5, 10),
                days_left: 2,
            }
        );
        assert_eq!(slots[4], CustomSlot::Unset { slot: 5 });
    }

    #[test]
    fn custom_past_dates_go_negative() {
        let entries = vec![CustomCountdown {
            name: "Launch".into(),
            date: date(2024, 5, 1),
        }];
        let slots = custom(on(2024, 5, 8, 12, 0), &entries);
        assert!(matches!(slots[0], CustomSlot::Set { days_left, .. } if days_left == -7));
    }

    #[test]
    fn holidays_roll_over_year() {
        let list = holidays(on(2024, 5, 8, 12, 0));
        assert_eq!(list.len(), 5);
        let new_year = &list[0];
        assert_eq!(new_year.date, date(2025, 1, 1));
        let national = list.iter().find(|h| h.name == "国庆节").unwrap();
        assert_eq!(national.date, date(2024, 10, 1));
        assert!(list.iter().all(|h| h.days_left > 0));
    }

    #[test]
    fn holiday_on_the_day_counts_to_next_year() {
        let list = holidays(on(2024, 5, 1, 8, 0));
        let labour = list.iter().find(|h| h.name == "劳动节").unwrap();
        assert_eq!(labour.date, date(2025, 5, 1));
    }
}
