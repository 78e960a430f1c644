//! Move selection for the computer player.
//!
//! Two algorithms share the [`MoveStrategy`] interface: [`RandomStrategy`]
//! and [`MinimaxStrategy`]. [`Difficulty`] is the closed set of strengths a
//! session can be configured with, and maps each one onto a strategy.

mod minimax;
mod random;

pub use minimax::{MinimaxStrategy, RootPolicy};
pub use random::RandomStrategy;

use crate::{Board, CellIndex, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An algorithm choosing a cell for the mark to move.
pub trait MoveStrategy {
    /// Picks an empty cell on `board` for `mark`.
    ///
    /// Returns `None` only when the board has no empty cell. The board is
    /// never modified. Strategies that need randomness draw it from `rng`.
    fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut R,
    ) -> Option<CellIndex>;
}

/// Strength of the computer opponent.
///
/// Parses from `weak`/`strong` as well as the original French labels
/// `facile`/`difficile`, case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random play.
    #[default]
    #[serde(alias = "facile")]
    #[strum(to_string = "weak", serialize = "facile", serialize = "easy")]
    Weak,
    /// Exhaustive minimax; never loses.
    #[serde(alias = "difficile")]
    #[strum(to_string = "strong", serialize = "difficile", serialize = "hard")]
    Strong,
}

impl Difficulty {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Easy",
            Self::Strong => "Hard",
        }
    }

    /// Toggles between `Weak` and `Strong`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Weak => Self::Strong,
            Self::Strong => Self::Weak,
        }
    }
}

impl MoveStrategy for Difficulty {
    #[instrument(skip(self, board, rng), fields(difficulty = %self))]
    fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        mark: Mark,
        rng: &mut R,
    ) -> Option<CellIndex> {
        // Weak play is random. The inverted minimax policy exists but is not
        // wired to any difficulty.
        let choice = match self {
            Difficulty::Weak => RandomStrategy.select_move(board, mark, rng),
            Difficulty::Strong => MinimaxStrategy::strong().select_move(board, mark, rng),
        };
        debug!(?choice, "Strategy chose cell");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::str::FromStr;

    #[test]
    fn test_parse_names() {
        assert_eq!(Difficulty::from_str("weak"), Ok(Difficulty::Weak));
        assert_eq!(Difficulty::from_str("Facile"), Ok(Difficulty::Weak));
        assert_eq!(Difficulty::from_str("STRONG"), Ok(Difficulty::Strong));
        assert_eq!(Difficulty::from_str("difficile"), Ok(Difficulty::Strong));
        assert!(Difficulty::from_str("medium").is_err());
    }

    #[test]
    fn test_display_and_toggle() {
        assert_eq!(Difficulty::Weak.to_string(), "weak");
        assert_eq!(Difficulty::Strong.to_string(), "strong");
        assert_eq!(Difficulty::Weak.toggle(), Difficulty::Strong);
        assert_eq!(Difficulty::Strong.toggle(), Difficulty::Weak);
        assert_eq!(Difficulty::default(), Difficulty::Weak);
    }

    #[test]
    fn test_strong_dispatches_to_minimax() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(1, Mark::X).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Difficulty::Strong.select_move(&board, Mark::O, &mut rng), Some(2));
    }

    #[test]
    fn test_weak_dispatches_to_random() {
        let mut board = Board::new();
        for index in [0, 1, 2, 3, 5, 6, 7, 8] {
            board.place(index, Mark::X).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Difficulty::Weak.select_move(&board, Mark::O, &mut rng), Some(4));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for index in 0..9 {
            board.place(index, Mark::X).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in [Difficulty::Weak, Difficulty::Strong] {
            assert_eq!(difficulty.select_move(&board, Mark::O, &mut rng), None);
        }
    }

    #[test]
    fn test_serde_accepts_french_labels() {
        let parsed: Difficulty = serde_json::from_str(r#""difficile""#).unwrap();
        assert_eq!(parsed, Difficulty::Strong);
        assert_eq!(serde_json::to_string(&Difficulty::Weak).unwrap(), r#""weak""#);
    }
}
