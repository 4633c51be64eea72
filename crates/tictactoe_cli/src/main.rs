//! Tic-tac-toe - terminal host
//!
//! Plays the engine against a human on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_cli::{ComputerPlayer, HostConfig, HumanPlayer, Orchestrator, Session, suggest};
use tictactoe_core::{Board, Difficulty, Game};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            difficulty,
            delay_ms,
            seed,
            config,
        } => run_play(config, difficulty, delay_ms, seed).await,
        Command::Suggest {
            board,
            difficulty,
            seed,
            json,
        } => run_suggest(&board, difficulty, seed, json),
    }
}

/// Log to stderr so stdout stays the game display.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tictactoe_cli=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive session
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: PathBuf,
    difficulty: Option<Difficulty>,
    delay_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let config =
        HostConfig::load_or_default(&config_path)?.with_overrides(difficulty, delay_ms, seed);
    info!(?config, "Starting interactive session");

    let mut game = config.seed().map(Game::with_seed).unwrap_or_default();
    game.set_difficulty(*config.difficulty());

    let human = HumanPlayer::new("You", tokio::io::BufReader::new(tokio::io::stdin()));
    let computer = ComputerPlayer::new("Computer", config.computer_delay());

    let mut orchestrator =
        Orchestrator::new(Session::new(game), Box::new(human), Box::new(computer));
    let mut stdout = std::io::stdout();
    orchestrator.run(&mut stdout).await?;

    Ok(())
}

/// Print the status of a board and the computer's reply
#[instrument]
fn run_suggest(board: &str, difficulty: Difficulty, seed: Option<u64>, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let suggestion = suggest(board, difficulty, seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!("{}", board.display());
        println!();
        println!("{}", suggestion);
    }
    Ok(())
}
