//! Parsing of player input lines.

use morpion_core::Position;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play the human's mark here.
    Move(Position),
    /// Switch between weak and strong opponents.
    ToggleDifficulty,
    /// Show the score tally.
    Scores,
    /// Leave the game.
    Quit,
    /// Anything else, kept for the error message.
    Unknown(String),
}

impl Command {
    /// Parses a line typed by the player.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Command::Quit,
            "d" | "difficulty" => Command::ToggleDifficulty,
            "s" | "scores" => Command::Scores,
            _ => Position::from_label_or_number(trimmed)
                .map(Command::Move)
                .unwrap_or_else(|| Command::Unknown(trimmed.to_string())),
        }
    }
}
