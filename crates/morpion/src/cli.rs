//! Command-line interface for morpion.

use clap::{Parser, Subcommand};
use morpion_core::Difficulty;
use std::path::PathBuf;

/// Morpion - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./morpion.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Computer strength: weak (random) or strong (minimax)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Score file to update
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Seed for the computer's random play
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the recorded scores
    Scores {
        /// Score file to read
        #[arg(long)]
        scores: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            difficulty: None,
            scores: None,
            seed: None,
        }
    }
}
