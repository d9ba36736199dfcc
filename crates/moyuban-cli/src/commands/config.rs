use std::path::PathBuf;

use clap::Subcommand;
use moyuban_core::{Settings, SettingsError};

use super::open_board;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a settings value
    Get {
        /// Settings key (e.g. "start", "salaryDay", "weekdays")
        key: String,
    },
    /// Set a settings value
    Set {
        /// Settings key
        key: String,
        /// New value
        value: String,
    },
    /// List all settings as JSON
    List,
    /// Reset settings to defaults
    Reset,
    /// Print settings as TOML
    Export,
    /// Replace settings from a TOML file
    Import {
        /// Path to a file produced by `config export`
        path: PathBuf,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = open_board()?;

    match action {
        ConfigAction::Get { key } => {
            let value = board
                .settings()
                .get(&key)
                .ok_or(SettingsError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let next = board.settings().with_value(&key, &value)?;
            let saved = board.save(next)?;
            println!("{}", saved.get(&key).unwrap_or_default());
        }
        ConfigAction::List => {
            let json = serde_json::to_string_pretty(&*board.settings())?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            board.save(Settings::default())?;
            println!("settings reset to defaults");
        }
        ConfigAction::Export => {
            print!("{}", board.settings().to_toml()?);
        }
        ConfigAction::Import { path } => {
            let content = std::fs::read_to_string(&path)?;
            let imported = Settings::from_toml(&content)?;
            board.save(imported)?;
            println!("imported settings from {}", path.display());
        }
    }
    Ok(())
}
