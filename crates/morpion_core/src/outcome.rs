//! Round status derived from a board.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Status of a round, recomputed from a board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won and at least one cell is empty.
    InProgress,
    /// The mark holds a full line.
    Win(Mark),
    /// Every cell is marked and nobody holds a line.
    Draw,
}

impl Outcome {
    /// Returns true once the round can no longer continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Terminal outcomes as a [`RoundResult`], `None` while in progress.
    pub fn round_result(&self) -> Option<RoundResult> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win(mark) => Some(RoundResult::Win(*mark)),
            Outcome::Draw => Some(RoundResult::Draw),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of a finished round, as reported to a score sink.
///
/// Unlike [`Outcome`] there is no in-progress variant: a finished round
/// always has a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// The mark won the round.
    Win(Mark),
    /// The round ended in a draw.
    Draw,
}

impl RoundResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            RoundResult::Win(mark) => Some(*mark),
            RoundResult::Draw => None,
        }
    }
}

impl From<RoundResult> for Outcome {
    fn from(result: RoundResult) -> Self {
        match result {
            RoundResult::Win(mark) => Outcome::Win(mark),
            RoundResult::Draw => Outcome::Draw,
        }
    }
}
