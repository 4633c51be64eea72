//! Command-line interface for the tic-tac-toe host.

use clap::{Parser, Subcommand};
use tictactoe_core::Difficulty;

/// Tic-tac-toe against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive session on stdin/stdout
    Play {
        /// Computer difficulty (easy, harder, expert)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,
    },

    /// Print a board's status and the computer's reply
    Suggest {
        /// Board as nine cells: X, O, or _ for empty (e.g. "XX_OO____")
        #[arg(short, long)]
        board: String,

        /// Computer difficulty (easy, harder, expert)
        #[arg(short, long, default_value_t = Difficulty::Expert)]
        difficulty: Difficulty,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
