//! Tic-tac-toe with time travel - command-line entry point.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_history::{ReplayPlan, Settings, SortOrder, run_replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&settings),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            let settings = if descending {
                settings.with_sort(SortOrder::Descending)
            } else {
                settings
            };
            replay(&settings, moves, jump, json)
        }
    }
}

/// Replays moves headlessly and prints the resulting view.
#[instrument(skip(settings))]
fn replay(settings: &Settings, cells: Vec<usize>, jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = cells.len(), "Starting replay");

    let plan = ReplayPlan {
        cells,
        jump,
        sort: *settings.sort(),
    };
    let replay = run_replay(&plan).context("Replay failed")?;

    let view = replay.view();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to serialize view")?
        );
    } else {
        print!("{view}");
    }
    Ok(())
}
