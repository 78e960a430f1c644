//! Win detection logic for tic-tac-toe.

use crate::{Board, LINES, Mark};

/// Checks if there is a winner on the board.
///
/// Returns the holder of the first completed line in [`LINES`] order,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&line| board.line_holder(line))
}

/// Returns true if `mark` holds any full line.
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|&line| board.line_holder(line) == Some(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &index in indices {
            board.place(index, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!is_winner(&board, Mark::X));
        assert!(!is_winner(&board, Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Mark::O, &line);
            assert_eq!(check_winner(&board), Some(Mark::O), "line {line:?}");
            assert!(is_winner(&board, Mark::O));
            assert!(!is_winner(&board, Mark::X));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[0, 1, 4]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[0, 1]);
        board.place(2, Mark::O).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
