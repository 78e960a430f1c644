//! Errors returned by board and session operations.

use crate::{CellIndex, Phase};

/// Error that can occur when applying or choosing a move.
///
/// Every variant is recoverable: the operation that returns it leaves the
/// board and session exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The cell at the index is already marked.
    #[display("Cell {} is already occupied", index + 1)]
    CellOccupied {
        /// Offending cell index (0-8).
        index: CellIndex,
    },

    /// The index does not name a cell.
    #[display("Cell {} is out of range (must be 1-9)", index + 1)]
    IndexOutOfRange {
        /// Offending cell index, 0-based like every [`CellIndex`].
        index: CellIndex,
    },

    /// A strategy was asked to move on a full board.
    #[display("No legal move: the board is full")]
    NoLegalMove,

    /// The operation is not valid in the session's current phase.
    #[display("Not allowed while {phase}")]
    OutOfTurn {
        /// Phase the session was in.
        phase: Phase,
    },
}

impl std::error::Error for GameError {}
