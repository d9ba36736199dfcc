//! Shared arithmetic for progress metrics: clamping and duration text.

use chrono::{Duration, NaiveDateTime};

/// Text shown for a countdown that has reached zero.
pub const ARRIVED: &str = "已到";

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Clamp a percentage into `[0, 100]`. NaN maps to 0.
pub fn clamp_pct(pct: f64) -> f64 {
    if pct.is_nan() {
        return 0.0;
    }
    pct.clamp(0.0, 100.0)
}

/// Elapsed share of `[start, end]` at `now`, clamped.
///
/// An empty or inverted window reads 100% once `now` reaches `end`, else 0%.
pub fn window_pct(now: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let span = (end - start).num_milliseconds();
    if span <= 0 {
        return if now >= end { 100.0 } else { 0.0 };
    }
    let elapsed = (now - start).num_milliseconds();
    clamp_pct(elapsed as f64 / span as f64 * 100.0)
}

/// `"{d}天{h}小时{m}分钟"`, floored to whole minutes, or [`ARRIVED`].
pub fn format_remaining(remaining: Duration) -> String {
    let ms = remaining.num_milliseconds();
    if ms <= 0 {
        return ARRIVED.to_string();
    }
    let days = ms / MS_PER_DAY;
    let hours = (ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    format!("{days}天{hours}小时{minutes}分钟")
}

/// Whole days from `now` to `target`, rounded up.
pub fn days_ceil(now: NaiveDateTime, target: NaiveDateTime) -> i64 {
    let ms = (target - now).num_milliseconds();
    let days = ms / MS_PER_DAY;
    // Integer division truncates toward zero, which is already the ceiling
    // for negative spans.
    if ms % MS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}
