//! User settings: the flat record and its field types.

mod record;
mod types;

pub use record::{Settings, FIELDS, MAX_CUSTOM, MIN_REFRESH_SECS};
pub use types::{ClockTime, CustomCountdown, DarkMode, Gender, WeekdayRange};
