//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay cell activations without a terminal UI and print the result
    Replay {
        /// Cell indices 0-8 in row-major order, comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Move number to view after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves latest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
