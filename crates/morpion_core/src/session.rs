//! Turn-taking state machine for a human playing the computer.
//!
//! The human always plays [`HUMAN`] (`X`) and moves first; the computer
//! plays [`COMPUTER`] (`O`). The session owns the live board and is driven
//! entirely by its caller:
//!
//! ```text
//! AwaitingHumanMove --apply_human_move--> AwaitingComputerMove | RoundOver
//! AwaitingComputerMove --run_computer_turn--> AwaitingHumanMove | RoundOver
//! RoundOver --reset--> AwaitingHumanMove   (result sent to the score sink)
//! ```

use crate::rules::evaluate;
use crate::strategy::{Difficulty, MoveStrategy};
use crate::{Board, CellIndex, GameError, Mark, Outcome, RoundResult, ScoreSink};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// Mark played by the human.
pub const HUMAN: Mark = Mark::X;

/// Mark played by the computer.
pub const COMPUTER: Mark = Mark::O;

/// Where the session is in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Phase {
    /// Waiting for [`Session::apply_human_move`].
    #[display("awaiting the human move")]
    AwaitingHumanMove,
    /// Waiting for [`Session::run_computer_turn`].
    #[display("awaiting the computer move")]
    AwaitingComputerMove,
    /// The round has ended; waiting for [`Session::reset`].
    #[display("the round is over ({_0})")]
    RoundOver(Outcome),
}

/// A human-versus-computer game session.
///
/// `K` receives round results; `R` is the randomness source handed to the
/// move strategy (seed it for reproducible weak play).
#[derive(Debug)]
pub struct Session<K, R = StdRng> {
    board: Board,
    phase: Phase,
    difficulty: Difficulty,
    rng: R,
    sink: K,
}

impl<K: ScoreSink> Session<K, StdRng> {
    /// Creates a session seeded from the operating system.
    #[instrument(skip(sink))]
    pub fn new(sink: K, difficulty: Difficulty) -> Self {
        Self::with_rng(sink, difficulty, StdRng::from_entropy())
    }

    /// Creates a session whose random play is reproducible.
    #[instrument(skip(sink))]
    pub fn seeded(sink: K, difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(sink, difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<K: ScoreSink, R: Rng> Session<K, R> {
    /// Creates a session with an explicit randomness source.
    pub fn with_rng(sink: K, difficulty: Difficulty, rng: R) -> Self {
        info!(%difficulty, "Creating session");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHumanMove,
            difficulty,
            rng,
            sink,
        }
    }

    /// Plays the human's mark at `index`.
    ///
    /// Returns the outcome after the move. On a terminal outcome the session
    /// moves to [`Phase::RoundOver`]; otherwise it waits for the computer.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfTurn`] unless the session awaits the human move.
    /// - [`GameError::IndexOutOfRange`] / [`GameError::CellOccupied`] for an
    ///   illegal cell.
    ///
    /// Nothing changes when an error is returned.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn apply_human_move(&mut self, index: CellIndex) -> Result<Outcome, GameError> {
        self.expect_phase(Phase::AwaitingHumanMove)?;
        self.play(index, HUMAN, Phase::AwaitingComputerMove)
    }

    /// Lets the computer choose and play its move.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfTurn`] unless the session awaits the computer move.
    /// - [`GameError::NoLegalMove`] if the strategy finds no empty cell.
    #[instrument(skip(self), fields(phase = %self.phase, difficulty = %self.difficulty))]
    pub fn run_computer_turn(&mut self) -> Result<Outcome, GameError> {
        self.expect_phase(Phase::AwaitingComputerMove)?;
        let index = self
            .difficulty
            .select_move(&self.board, COMPUTER, &mut self.rng)
            .ok_or(GameError::NoLegalMove)?;
        self.play(index, COMPUTER, Phase::AwaitingHumanMove)
    }

    /// Starts a new round on an empty board.
    ///
    /// When the round is over its result goes to the score sink first, and
    /// is returned. Resetting mid-round just clears the board.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) -> Option<RoundResult> {
        let recorded = match self.phase {
            Phase::RoundOver(outcome) => outcome.round_result(),
            Phase::AwaitingHumanMove | Phase::AwaitingComputerMove => None,
        };
        if let Some(result) = recorded {
            info!(?result, "Recording round result");
            self.sink.record_result(result);
        } else {
            debug!("Abandoning unfinished round");
        }
        self.board = Board::new();
        self.phase = Phase::AwaitingHumanMove;
        recorded
    }

    /// Snapshot of the board, for rendering.
    pub fn current_board(&self) -> Board {
        self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Status of the current round.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Mark expected to move next, `None` once the round is over.
    pub fn to_move(&self) -> Option<Mark> {
        match self.phase {
            Phase::AwaitingHumanMove => Some(HUMAN),
            Phase::AwaitingComputerMove => Some(COMPUTER),
            Phase::RoundOver(_) => None,
        }
    }

    /// Changes the computer's strength. Applies from its next turn.
    #[instrument(skip(self))]
    pub fn set_strategy(&mut self, difficulty: Difficulty) {
        info!(from = %self.difficulty, to = %difficulty, "Changing difficulty");
        self.difficulty = difficulty;
    }

    /// Current computer strength.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the score sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Consumes the session, returning the score sink.
    pub fn into_sink(self) -> K {
        self.sink
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            warn!(current = %self.phase, wanted = %expected, "Operation out of turn");
            Err(GameError::OutOfTurn { phase: self.phase })
        }
    }

    fn play(&mut self, index: CellIndex, mark: Mark, next: Phase) -> Result<Outcome, GameError> {
        self.board.place(index, mark)?;
        let outcome = evaluate(&self.board);
        self.phase = if outcome.is_terminal() {
            Phase::RoundOver(outcome)
        } else {
            next
        };
        debug!(index, %mark, %outcome, phase = %self.phase, "Move applied");
        Ok(outcome)
    }
}
