use clap::Args;
use tokio::sync::mpsc;

use super::{open_board, zone_label};
use crate::render;

#[derive(Args)]
pub struct WatchArgs {
    /// Exit after this many renders
    #[arg(long)]
    ticks: Option<u64>,
    /// Print each render as a JSON line
    #[arg(long)]
    json: bool,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch(args))
}

async fn watch(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = open_board()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    board.start(tx);
    tracing::info!(refresh = board.settings().refresh, "watching");

    let zone = zone_label();
    let mut rendered = 0u64;
    loop {
        tokio::select! {
            next = rx.recv() => {
                let Some(dashboard) = next else { break };
                if args.json {
                    println!("{}", serde_json::to_string(&dashboard)?);
                } else {
                    // Clear the screen between renders.
                    print!("\x1b[2J\x1b[H");
                    println!("{}", render::board(&dashboard, &zone));
                }
                rendered += 1;
                if args.ticks.is_some_and(|limit| rendered >= limit) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    board.stop();
    Ok(())
}
