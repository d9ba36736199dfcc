//! Plain-text rendering of a [`Dashboard`].

use std::fmt::Write;

use moyuban_core::progress::CustomSlot;
use moyuban_core::Dashboard;

const BAR_WIDTH: usize = 24;

/// Colours for one theme. Light mode prints no escape codes.
struct Palette {
    heading: &'static str,
    bar: &'static str,
    dim: &'static str,
    reset: &'static str,
}

const LIGHT: Palette = Palette {
    heading: "",
    bar: "",
    dim: "",
    reset: "",
};

const DARK: Palette = Palette {
    heading: "\x1b[1;36m",
    bar: "\x1b[32m",
    dim: "\x1b[90m",
    reset: "\x1b[0m",
};

fn bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Render the board as text. `zone` labels the local timezone.
pub fn board(b: &Dashboard, zone: &str) -> String {
    let p = if b.dark { &DARK } else { &LIGHT };
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}{}{} {}({}){}",
        p.heading,
        b.now.format("%Y-%m-%d %H:%M:%S"),
        p.reset,
        p.dim,
        zone,
        p.reset
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}今日进度{}", p.heading, p.reset);
    let _ = writeln!(
        out,
        "{}{}{} 已过 {:.1}%，离下班 {}",
        p.bar,
        bar(b.workday.percent),
        p.reset,
        b.workday.percent,
        b.workday.remaining
    );

    let _ = writeln!(out, "{}本周进度{}", p.heading, p.reset);
    let _ = writeln!(
        out,
        "{}{}{} 已过 {:.1}%，剩余 {:.1}%",
        p.bar,
        bar(b.week.percent),
        p.reset,
        b.week.percent,
        b.week.remaining_percent
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}周末倒计时{} {}", p.heading, p.reset, b.weekend.remaining);
    let _ = writeln!(out, "{}发薪倒计时{} {}", p.heading, p.reset, b.payday.remaining);
    let _ = writeln!(out);

    let _ = writeln!(out, "{}自定义倒计时{}", p.heading, p.reset);
    for slot in &b.custom {
        match slot {
            CustomSlot::Set {
                name, days_left, ..
            } => {
                let _ = writeln!(out, "  {name}：还有 {days_left} 天");
            }
            CustomSlot::Unset { slot } => {
                let _ = writeln!(out, "  {}{slot}. 未设置{}", p.dim, p.reset);
            }
        }
    }

    let _ = writeln!(out, "{}节假日{}", p.heading, p.reset);
    for h in &b.holidays {
        let _ = writeln!(out, "  {}：还有 {} 天", h.name, h.days_left);
    }
    let _ = writeln!(out);

    let r = &b.retirement;
    let _ = writeln!(out, "{}退休倒计时{}", p.heading, p.reset);
    let _ = writeln!(
        out,
        "{}{}{} {:.2}%",
        p.bar,
        bar(r.percent),
        p.reset,
        r.percent
    );
    let _ = writeln!(out, "  入职：{} ・ 退休年龄：{}岁", r.hire, r.retire_age);
    let _ = writeln!(
        out,
        "  已工作 {} 个月 · 剩余 {} 个月",
        r.passed_months, r.remaining_months
    );
    let _ = writeln!(out);

    let _ = write!(out, "{}{}{}", p.dim, b.mood.quote, p.reset);
    out
}
