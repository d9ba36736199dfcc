use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::format::clamp_pct;
use crate::settings::Gender;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetirementProgress {
    pub hire: NaiveDate,
    pub retire_on: NaiveDate,
    pub retire_age: i32,
    pub total_months: i64,
    pub passed_months: i64,
    pub remaining_months: i64,
    pub percent: f64,
}

/// Calendar-month difference, ignoring day of month.
fn months_between(from: (i32, u32), to: (i32, u32)) -> i64 {
    i64::from(to.0 - from.0) * 12 + i64::from(to.1) - i64::from(from.1)
}

/// `hire` moved forward by `years`. 29 February lands on 1 March.
fn add_years(hire: NaiveDate, years: i32) -> NaiveDate {
    let year = hire.year() + years;
    hire.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(hire)
}

pub fn retirement(now: NaiveDateTime, hire: NaiveDate, gender: Gender) -> RetirementProgress {
    let retire_age = gender.retirement_age();
    let retire_on = add_years(hire, retire_age);

    let hired = (hire.year(), hire.month());
    let total_months = months_between(hired, (retire_on.year(), retire_on.month()));
    let passed_months = months_between(hired, (now.year(), now.month()));
    let percent = if total_months > 0 {
        clamp_pct(passed_months as f64 / total_months as f64 * 100.0)
    } else {
        100.0
    };

    RetirementProgress {
        hire,
        retire_on,
        retire_age,
        total_months,
        passed_months,
        remaining_months: total_months - passed_months,
        percent,
    }
}
