use chrono::NaiveDate;
use clap::Subcommand;

use super::open_board;

#[derive(Subcommand)]
pub enum CustomAction {
    /// List configured countdowns
    List,
    /// Add a countdown
    Add {
        /// Display name
        name: String,
        /// Target date (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// Remove the countdown in a slot (1-5)
    Remove { slot: usize },
    /// Remove all countdowns
    Clear,
}

pub fn run(action: CustomAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = open_board()?;
    let mut settings = (*board.settings()).clone();

    match action {
        CustomAction::List => {
            for (i, c) in settings.custom.iter().enumerate() {
                println!("{}. {} {}", i + 1, c.name, c.date);
            }
            return Ok(());
        }
        CustomAction::Add { name, date } => {
            settings.add_custom(&name, date)?;
            println!("added slot {}", settings.custom.len());
        }
        CustomAction::Remove { slot } => {
            let removed = settings.remove_custom(slot)?;
            println!("removed {}", removed.name);
        }
        CustomAction::Clear => {
            settings.clear_custom();
            println!("cleared");
        }
    }

    board.save(settings)?;
    Ok(())
}
