use chrono::{Local, NaiveDateTime};
use clap::Args;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

use super::{open_board, zone_label};
use crate::render;

#[derive(Args)]
pub struct ShowArgs {
    /// Evaluate at this local time instead of now ("YYYY-MM-DD HH:MM[:SS]")
    #[arg(long, value_parser = parse_local_datetime)]
    at: Option<NaiveDateTime>,
    /// Print the board as JSON
    #[arg(long)]
    json: bool,
    /// Seed for the quote picker
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];
    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s.trim(), f).ok())
        .ok_or_else(|| format!("expected 'YYYY-MM-DD HH:MM', got '{s}'"))
}

pub fn run(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let board = open_board()?;
    let now = args.at.unwrap_or_else(|| Local::now().naive_local());
    let dashboard = match args.seed {
        Some(seed) => board.render(now, &mut Mcg128Xsl64::seed_from_u64(seed)),
        None => board.render(now, &mut rand::thread_rng()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        println!("{}", render::board(&dashboard, &zone_label()));
    }
    Ok(())
}
