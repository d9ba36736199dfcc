pub mod config;
pub mod custom;
pub mod show;
pub mod watch;

use moyuban_core::{Board, Database};

/// Open the board backed by the on-disk database.
pub(crate) fn open_board() -> Result<Board<Database>, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    Ok(Board::open(db))
}

/// Label for the local UTC offset, e.g. `UTC+08:00`. This is an offset,
/// not an IANA zone name.
pub(crate) fn zone_label() -> String {
    chrono::Local::now().format("UTC%:z").to_string()
}
