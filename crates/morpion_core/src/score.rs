//! Score sink consumed by the session at the end of each round.

use crate::{Mark, RoundResult};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Receives the result of every finished round.
///
/// The session calls [`ScoreSink::record_result`] exactly once per round,
/// from [`Session::reset`](crate::Session::reset), before clearing the board.
pub trait ScoreSink {
    /// Records a finished round.
    fn record_result(&mut self, result: RoundResult);
}

impl<S: ScoreSink + ?Sized> ScoreSink for &mut S {
    fn record_result(&mut self, result: RoundResult) {
        (**self).record_result(result);
    }
}

/// In-memory count of wins per mark and draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds won by X.
    #[serde(default)]
    x_wins: u32,
    /// Rounds won by O.
    #[serde(default)]
    o_wins: u32,
    /// Drawn rounds.
    #[serde(default)]
    draws: u32,
}

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Rounds recorded so far.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl AsRef<Tally> for Tally {
    fn as_ref(&self) -> &Tally {
        self
    }
}

impl ScoreSink for Tally {
    #[instrument(skip(self))]
    fn record_result(&mut self, result: RoundResult) {
        match result {
            RoundResult::Win(Mark::X) => self.x_wins += 1,
            RoundResult::Win(Mark::O) => self.o_wins += 1,
            RoundResult::Draw => self.draws += 1,
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, draws = self.draws, "Tally updated");
    }
}
