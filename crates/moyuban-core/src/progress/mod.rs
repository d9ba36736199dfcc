//! Temporal progress calculator.
//!
//! Pure functions of `(now, settings)`: nothing here reads the clock,
//! touches storage, or fails. `now` is a local wall-clock time; every
//! percentage is clamped to `[0, 100]`.
//!
//! [`Dashboard::compute`] evaluates every metric at once. The individual
//! metrics are exposed for callers that only need one.

mod countdown;
mod format;
mod mood;
mod retirement;
mod workday;

pub use countdown::{
    custom, holidays, payday, weekend, Countdown, CustomSlot, Holiday, HolidayCountdown, HOLIDAYS,
};
pub use format::{clamp_pct, days_ceil, format_remaining, window_pct, ARRIVED};
pub use mood::{mood, Mood, ACTIVE_QUOTES, RELAXED_QUOTES};
pub use retirement::{retirement, RetirementProgress};
pub use workday::{week, workday, WeekProgress, WorkdayProgress};

use chrono::NaiveDateTime;
use rand::Rng;
use serde::Serialize;

use crate::settings::Settings;

/// Every metric the board shows, evaluated at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub now: NaiveDateTime,
    pub dark: bool,
    pub workday: WorkdayProgress,
    pub week: WeekProgress,
    pub weekend: Countdown,
    pub payday: Countdown,
    pub custom: Vec<CustomSlot>,
    pub holidays: Vec<HolidayCountdown>,
    pub retirement: RetirementProgress,
    pub mood: Mood,
}

impl Dashboard {
    pub fn compute<R: Rng + ?Sized>(now: NaiveDateTime, settings: &Settings, rng: &mut R) -> Self {
        Self {
            now,
            dark: settings.dark.is_on(),
            workday: workday(now, settings.start, settings.end),
            week: week(now, settings.weekdays),
            weekend: weekend(now),
            payday: payday(now, settings.salary_day),
            custom: custom(now, &settings.custom),
            holidays: holidays(now),
            retirement: retirement(now, settings.hire, settings.gender),
            mood: mood(now, settings.active_start, settings.active_end, rng),
        }
    }

    /// All progress-bar percentages, for bounds checks.
    pub fn percentages(&self) -> [f64; 4] {
        [
            self.workday.percent,
            self.week.percent,
            self.week.remaining_percent,
            self.retirement.percent,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    #[test]
    fn compute_uses_every_setting() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 8)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();
        let mut settings = Settings::defaults_on(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        settings.dark = crate::settings::DarkMode::On;
        settings.salary_day = 25;
        let board = Dashboard::compute(now, &settings, &mut Mcg128Xsl64::seed_from_u64(3));

        assert!(board.dark);
        assert_eq!(board.workday.percent, 50.0);
        assert_eq!(board.payday.target.date(), NaiveDate::from_ymd_opt(2024, 5, 25).unwrap());
        assert_eq!(board.custom.len(), 5);
        assert_eq!(board.holidays.len(), 5);
        assert_eq!(board.retirement.passed_months, 292);
        assert!(!board.mood.active);
        assert!(board.percentages().iter().all(|p| (0.0..=100.0).contains(p)));
    }

    #[test]
    fn dashboard_serializes() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 8)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let settings = Settings::defaults_on(now.date());
        let board = Dashboard::compute(now, &settings, &mut Mcg128Xsl64::seed_from_u64(3));
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["workday"]["remaining"], "0天8小时0分钟");
        assert_eq!(json["custom"][0]["state"], "unset");
        assert_eq!(json["mood"]["active"], true);
    }
}
