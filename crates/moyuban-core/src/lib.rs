//! # Moyuban Core Library
//!
//! Core logic for the Moyuban progress board: how far through the workday,
//! the week and the career you are, and how long until the weekend, payday,
//! the next holiday or a date of your choosing.
//!
//! ## Architecture
//!
//! - **Progress**: pure calculator from `(now, settings)` to a [`Dashboard`]
//! - **Settings**: the flat persisted record, merged over defaults on load
//! - **Storage**: key-value contract with SQLite and in-memory backends
//! - **Timer**: recurring refresh ticker with start/stop/replace semantics
//! - **Board**: ties a store, the current settings snapshot and a ticker
//!
//! ## Key Components
//!
//! - [`Dashboard`]: every metric evaluated at one instant
//! - [`Settings`]: user configuration
//! - [`SettingsStore`]: storage contract, implemented by [`Database`]
//! - [`Board`]: settings lifecycle and periodic rendering

pub mod board;
pub mod error;
pub mod progress;
pub mod settings;
pub mod storage;
pub mod timer;

pub use board::Board;
pub use error::{CoreError, SettingsError, StorageError};
pub use progress::Dashboard;
pub use settings::{ClockTime, CustomCountdown, DarkMode, Gender, Settings, WeekdayRange};
pub use storage::{Database, MemoryStore, SettingsStore};
pub use timer::Ticker;
