//! Morpion - terminal tic-tac-toe against the computer.

use anyhow::{Context, Result};
use clap::Parser;
use morpion::{Cli, Command, Console, ScoreFile, Settings};
use morpion_core::{Mark, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            difficulty,
            scores,
            seed,
        } => play(settings.with_overrides(difficulty, scores, seed)),
        Command::Scores { scores } => show_scores(settings.with_overrides(None, scores, None)),
    }
}

/// Runs the interactive game on stdin/stdout.
#[instrument(skip_all, fields(difficulty = %settings.difficulty()))]
fn play(settings: Settings) -> Result<()> {
    let scores = ScoreFile::load(settings.score_file())
        .with_context(|| format!("Cannot open scores at {}", settings.score_file().display()))?;

    let mut session = match settings.seed() {
        Some(seed) => Session::seeded(scores, *settings.difficulty(), *seed),
        None => Session::new(scores, *settings.difficulty()),
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let rounds = console.run(&mut session)?;
    info!(rounds, "Session ended");

    let tally = *session.sink().tally();
    println!(
        "Final scores - X: {}, O: {}, draws: {}",
        tally.wins(Mark::X),
        tally.wins(Mark::O),
        tally.draws()
    );
    Ok(())
}

/// Prints the persisted tally.
#[instrument(skip_all)]
fn show_scores(settings: Settings) -> Result<()> {
    let path = settings.score_file();
    let scores = ScoreFile::load(path)
        .with_context(|| format!("Cannot open scores at {}", path.display()))?;
    let tally = scores.tally();
    println!("Scores ({})", scores.path().display());
    println!("  X (you):      {}", tally.wins(Mark::X));
    println!("  O (computer): {}", tally.wins(Mark::O));
    println!("  Draws:        {}", tally.draws());
    Ok(())
}
