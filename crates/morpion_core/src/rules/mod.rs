//! Game rules for tic-tac-toe.
//!
//! Pure functions deriving the round status from a board snapshot. Rules are
//! separated from board storage so the search can call them on copies.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, is_winner};

use crate::{Board, Outcome};

/// Derives the round status from a board.
///
/// Lines are checked first, so a full board with a completed line is a win,
/// not a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
