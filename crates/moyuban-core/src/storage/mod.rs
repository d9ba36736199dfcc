//! Persistent settings storage.
//!
//! Storage is an opaque key-value contract ([`SettingsStore`]). The settings
//! record lives under a single fixed key as one JSON blob.

pub mod database;
mod memory;

pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::StorageError;
use crate::settings::Settings;

/// Key the settings blob is stored under.
pub const SETTINGS_KEY: &str = "moyuban.settings";

/// Key-value contract the settings are persisted through.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Load settings merged over the defaults for `today`.
///
/// Never fails: absent or unreadable data yields the default record.
pub fn load_settings_on<S: SettingsStore + ?Sized>(store: &S, today: NaiveDate) -> Settings {
    let defaults = Settings::defaults_on(today);
    match store.get(SETTINGS_KEY) {
        Ok(Some(stored)) => Settings::merge_over(defaults, &stored),
        Ok(None) => {
            tracing::debug!("no stored settings, using defaults");
            defaults
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read settings, using defaults");
            defaults
        }
    }
}

/// Load settings merged over today's defaults.
pub fn load_settings<S: SettingsStore + ?Sized>(store: &S) -> Settings {
    load_settings_on(store, chrono::Local::now().date_naive())
}

/// Sanitize and persist `settings`, returning what was written.
pub fn save_settings<S: SettingsStore + ?Sized>(
    store: &S,
    settings: Settings,
) -> Result<Settings, StorageError> {
    let settings = settings.sanitized();
    let value = serde_json::to_value(&settings).map_err(|e| StorageError::Encoding {
        key: SETTINGS_KEY.to_string(),
        message: e.to_string(),
    })?;
    store.set(SETTINGS_KEY, &value)?;
    tracing::info!(refresh = settings.refresh, "settings saved");
    Ok(settings)
}

/// Returns the data directory.
///
/// `MOYUBAN_DATA_DIR` overrides the location. Otherwise this is
/// `~/.config/moyuban[-dev]/`, with `MOYUBAN_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("MOYUBAN_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("MOYUBAN_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("moyuban-dev")
            } else {
                base_dir.join("moyuban")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
