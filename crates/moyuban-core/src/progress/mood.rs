use chrono::{NaiveDateTime, Timelike};
use rand::Rng;
use serde::Serialize;

use crate::settings::ClockTime;

pub const ACTIVE_QUOTES: [&str; 3] = [
    "摸鱼是门艺术，要讲节奏 🎨",
    "认真摸鱼，快乐加倍 🐠",
    "效率摸鱼两不误 💼",
];

pub const RELAXED_QUOTES: [&str; 3] = [
    "摸鱼使我快乐 😎",
    "摸鱼是对工作的尊重 ✨",
    "你摸，我摸，大家都摸 🐟",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mood {
    /// Whether `now` fell inside the active window.
    pub active: bool,
    pub quote: &'static str,
}

/// Pick a quote: from the active set inside `[active_start, active_end]`
/// (inclusive, minute resolution), otherwise from the relaxed set.
pub fn mood<R: Rng + ?Sized>(
    now: NaiveDateTime,
    active_start: ClockTime,
    active_end: ClockTime,
    rng: &mut R,
) -> Mood {
    let minute = now.hour() * 60 + now.minute();
    let active =
        minute >= active_start.minute_of_day() && minute <= active_end.minute_of_day();
    let pool: &[&'static str] = if active {
        &ACTIVE_QUOTES
    } else {
        &RELAXED_QUOTES
    };
    Mood {
        active,
        quote: pool[rng.gen_range(0..pool.len())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 8)
            .unwrap()
            .and_hms_opt(h, m, 30)
            .unwrap()
    }

    fn clock(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn active_window_is_inclusive() {
        let mut rng = Mcg128Xsl64::seed_from_u64(7);
        for (h, m) in [(9, 0), (10, 15), (11, 0)] {
            let mood = mood(at(h, m), clock("09:00"), clock("11:00"), &mut rng);
            assert!(mood.active, "{h}:{m} should be active");
            assert!(ACTIVE_QUOTES.contains(&mood.quote));
        }
    }

    #[test]
    fn outside_window_is_relaxed() {
        let mut rng = Mcg128Xsl64::seed_from_u64(7);
        for (h, m) in [(8, 59), (11, 1), (23, 0)] {
            let mood = mood(at(h, m), clock("09:00"), clock("11:00"), &mut rng);
            assert!(!mood.active);
            assert!(RELAXED_QUOTES.contains(&mood.quote));
        }
    }

    #[test]
    fn same_seed_same_quote() {
        let a = mood(at(10, 0), clock("09:00"), clock("11:00"), &mut Mcg128Xsl64::seed_from_u64(42));
        let b = mood(at(10, 0), clock("09:00"), clock("11:00"), &mut Mcg128Xsl64::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_quote_is_reachable() {
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(mood(at(20, 0), clock("09:00"), clock("11:00"), &mut rng).quote);
        }
        assert_eq!(seen.len(), RELAXED_QUOTES.len());
    }
}
