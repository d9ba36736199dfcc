//! The persisted settings record.
//!
//! One flat record, serialized with the camelCase keys the popup has always
//! used (`activeStart`, `salaryDay`, ...). Loading merges whatever was stored
//! over the defaults field by field, so a missing or unreadable field never
//! discards the rest of the record.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{ClockTime, CustomCountdown, DarkMode, Gender, WeekdayRange};
use crate::error::{CoreError, SettingsError};

/// Number of custom countdown slots.
pub const MAX_CUSTOM: usize = 5;
/// Lower bound for the refresh period, in seconds.
pub const MIN_REFRESH_SECS: u64 = 5;

const DEFAULT_REFRESH_SECS: u64 = 60;
const DEFAULT_SALARY_DAY: u32 = 20;

/// Every top-level key of the serialized record.
pub const FIELDS: [&str; 11] = [
    "start",
    "end",
    "hire",
    "gender",
    "refresh",
    "dark",
    "activeStart",
    "activeEnd",
    "salaryDay",
    "weekdays",
    "custom",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Start of the workday.
    pub start: ClockTime,
    /// End of the workday.
    pub end: ClockTime,
    pub hire: NaiveDate,
    pub gender: Gender,
    /// Refresh period in seconds.
    pub refresh: u64,
    pub dark: DarkMode,
    /// Start of the "active" quote window.
    pub active_start: ClockTime,
    /// End of the "active" quote window (inclusive).
    pub active_end: ClockTime,
    /// Day of month salary arrives. Not range-checked: days past the end of
    /// a month roll into the next one.
    pub salary_day: u32,
    pub weekdays: WeekdayRange,
    pub custom: Vec<CustomCountdown>,
}

fn clock(hour: u32, minute: u32) -> ClockTime {
    ClockTime::new(hour, minute).unwrap_or_default()
}

impl Settings {
    /// Default record with the hire date set to `today`.
    pub fn defaults_on(today: NaiveDate) -> Self {
        Self {
            start: clock(9, 0),
            end: clock(18, 0),
            hire: today,
            gender: Gender::Male,
            refresh: DEFAULT_REFRESH_SECS,
            dark: DarkMode::Off,
            active_start: clock(9, 0),
            active_end: clock(11, 0),
            salary_day: DEFAULT_SALARY_DAY,
            weekdays: WeekdayRange::default(),
            custom: Vec::new(),
        }
    }

    /// Enforce record invariants: refresh floor, non-zero salary day, at most
    /// five named custom countdowns.
    pub fn sanitized(mut self) -> Self {
        self.refresh = self.refresh.max(MIN_REFRESH_SECS);
        if self.salary_day == 0 {
            self.salary_day = DEFAULT_SALARY_DAY;
        }
        self.custom.retain(|c| !c.name.trim().is_empty());
        for c in &mut self.custom {
            c.name = c.name.trim().to_string();
        }
        self.custom.truncate(MAX_CUSTOM);
        self
    }

    /// Merge a stored blob over `defaults`, one field at a time.
    ///
    /// Unknown keys are ignored. A field whose stored value does not
    /// deserialize keeps its default.
    pub fn merge_over(defaults: Settings, stored: &Value) -> Settings {
        let Some(obj) = stored.as_object() else {
            tracing::warn!("stored settings are not an object, using defaults");
            return defaults;
        };
        let mut merged = match serde_json::to_value(&defaults) {
            Ok(v) => v,
            Err(_) => return defaults,
        };

        for (key, value) in obj {
            if !FIELDS.contains(&key.as_str()) {
                tracing::debug!(key = %key, "ignoring unknown stored settings key");
                continue;
            }
            let mut candidate = merged.clone();
            candidate[key.as_str()] = value.clone();
            match serde_json::from_value::<Settings>(candidate.clone()) {
                Ok(_) => merged = candidate,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "dropping unreadable stored settings field");
                }
            }
        }

        serde_json::from_value::<Settings>(merged)
            .map(Settings::sanitized)
            .unwrap_or(defaults)
    }

    /// Get a field as a display string by its key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match json.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Return a copy with `key` set from its string form.
    ///
    /// Numbers are parsed as integers, `custom` as a JSON array, everything
    /// else through the field's own string format.
    pub fn with_value(&self, key: &str, value: &str) -> Result<Settings, SettingsError> {
        if !FIELDS.contains(&key) {
            return Err(SettingsError::UnknownKey(key.to_string()));
        }
        let invalid = |message: String| SettingsError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut json = serde_json::to_value(self).map_err(|e| invalid(e.to_string()))?;
        let new_value = match json.get(key) {
            Some(Value::Number(_)) => value
                .trim()
                .parse::<u64>()
                .map(|n| Value::Number(n.into()))
                .map_err(|_| invalid(format!("cannot parse '{value}' as a whole number")))?,
            Some(Value::Array(_)) => {
                serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
            }
            _ => Value::String(value.trim().to_string()),
        };
        json[key] = new_value;

        let updated: Settings =
            serde_json::from_value(json).map_err(|e| invalid(strip_serde_position(&e)))?;
        if updated.custom.len() > MAX_CUSTOM {
            return Err(SettingsError::TooManyCustom { max: MAX_CUSTOM });
        }
        Ok(updated.sanitized())
    }

    /// Append a custom countdown.
    pub fn add_custom(&mut self, name: &str, date: NaiveDate) -> Result<(), SettingsError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SettingsError::InvalidValue {
                key: "custom".into(),
                message: "name must not be empty".into(),
            });
        }
        if self.custom.len() >= MAX_CUSTOM {
            return Err(SettingsError::TooManyCustom { max: MAX_CUSTOM });
        }
        self.custom.push(CustomCountdown {
            name: name.to_string(),
            date,
        });
        Ok(())
    }

    /// Remove the custom countdown in 1-based `slot`.
    pub fn remove_custom(&mut self, slot: usize) -> Result<CustomCountdown, SettingsError> {
        if slot == 0 || slot > self.custom.len() {
            return Err(SettingsError::SlotOutOfRange {
                slot,
                len: self.custom.len(),
            });
        }
        Ok(self.custom.remove(slot - 1))
    }

    pub fn clear_custom(&mut self) {
        self.custom.clear();
    }

    /// Render as TOML for backup.
    pub fn to_toml(&self) -> Result<String, CoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse a TOML backup. Missing fields take their defaults.
    pub fn from_toml(content: &str) -> Result<Settings, CoreError> {
        let parsed: Settings = toml::from_str(content)?;
        if parsed.custom.len() > MAX_CUSTOM {
            return Err(SettingsError::TooManyCustom { max: MAX_CUSTOM }.into());
        }
        Ok(parsed.sanitized())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults_on(Local::now().date_naive())
    }
}

fn strip_serde_position(err: &serde_json::Error) -> String {
    let msg = err.to_string();
    match msg.find(" at line ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg,
    }
}
