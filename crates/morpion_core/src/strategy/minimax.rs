//! Exhaustive minimax search.
//!
//! The board is small enough (at most 9! move orders) that the search always
//! runs to the end of the game: no depth limit, no transposition table, no
//! pruning. Terminal positions score `+1` when the mark that was to move at
//! the root has won, `-1` when its opponent has, and `0` for a draw.
//!
//! Every candidate is explored on a copy of the board, so the caller's board
//! is never left holding a speculative mark.

use super::MoveStrategy;
use crate::rules::evaluate;
use crate::{Board, CELL_COUNT, CellIndex, Mark, Outcome};
use rand::Rng;
use tracing::{instrument, trace};

/// Minimax value of a position.
pub type Score = i8;

/// How the root move is picked from the minimax scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootPolicy {
    /// Best move for the mark to move. Optimal play.
    Maximize,
    /// Worst move for the mark to move, i.e. the best one for its opponent.
    Minimize,
}

/// Minimax move selection with a configurable root policy.
///
/// Ties go to the lowest cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy {
    policy: RootPolicy,
}

impl MinimaxStrategy {
    /// Optimal play: never loses, wins whenever the opponent allows it.
    pub const fn strong() -> Self {
        Self {
            policy: RootPolicy::Maximize,
        }
    }

    /// Deliberately plays the move most favourable to the opponent.
    pub const fn inverted() -> Self {
        Self {
            policy: RootPolicy::Minimize,
        }
    }

    /// Minimax score of every empty cell, ascending by index, from the point
    /// of view of `mark` playing that cell now.
    #[instrument(skip(board))]
    pub fn score_moves(board: &Board, mark: Mark) -> Vec<(CellIndex, Score)> {
        (0..CELL_COUNT)
            .filter_map(|index| Some((index, after_move(board, index, mark)?)))
            .map(|(index, child)| (index, minimax(&child, mark, mark.opponent())))
            .collect()
    }
}

impl MoveStrategy for MinimaxStrategy {
    #[instrument(skip(self, board, _rng), fields(policy = ?self.policy))]
    fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        mark: Mark,
        _rng: &mut R,
    ) -> Option<CellIndex> {
        let mut best: Option<(CellIndex, Score)> = None;
        for (index, score) in Self::score_moves(board, mark) {
            trace!(index, score, "Scored root move");
            let better = match (best, self.policy) {
                (None, _) => true,
                (Some((_, top)), RootPolicy::Maximize) => score > top,
                (Some((_, top)), RootPolicy::Minimize) => score < top,
            };
            if better {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| index)
    }
}

/// Copy of `board` with `mark` at `index`, `None` if the cell is taken.
fn after_move(board: &Board, index: CellIndex, mark: Mark) -> Option<Board> {
    let mut next = *board;
    next.place(index, mark).ok()?;
    Some(next)
}

/// Value of `board` for `root`, with `to_move` about to play.
fn minimax(board: &Board, root: Mark, to_move: Mark) -> Score {
    match evaluate(board) {
        Outcome::Win(mark) if mark == root => 1,
        Outcome::Win(_) => -1,
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let scores = (0..CELL_COUNT)
                .filter_map(|index| after_move(board, index, to_move))
                .map(|child| minimax(&child, root, to_move.opponent()));
            // In progress means at least one empty cell, so neither fold
            // below sees an empty iterator.
            if to_move == root {
                scores.fold(Score::MIN, Score::max)
            } else {
                scores.fold(Score::MAX, Score::min)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const E: Cell = Cell::Empty;
    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);

    fn pick(strategy: MinimaxStrategy, board: &Board, mark: Mark) -> Option<CellIndex> {
        let mut rng = StdRng::seed_from_u64(0);
        strategy.select_move(board, mark, &mut rng)
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_cells([O, O, E, X, X, E, E, E, E]);
        assert_eq!(pick(MinimaxStrategy::strong(), &board, Mark::O), Some(2));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let board = Board::from_cells([X, X, E, E, E, E, E, E, E]);
        assert_eq!(pick(MinimaxStrategy::strong(), &board, Mark::O), Some(2));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // O can win at 5; X threatens at 2.
        let board = Board::from_cells([X, X, E, O, O, E, X, E, E]);
        assert_eq!(pick(MinimaxStrategy::strong(), &board, Mark::O), Some(5));
    }

    #[test]
    fn test_scores_from_mover_perspective() {
        let board = Board::from_cells([O, O, E, X, X, E, E, E, E]);
        let scores = MinimaxStrategy::score_moves(&board, Mark::O);
        assert_eq!(scores.first(), Some(&(2, 1)));
        // Leaving 5 open lets X win at once.
        assert!(scores.iter().filter(|(i, _)| *i != 2 && *i != 5).all(|(_, s)| *s == -1));

        let for_x = MinimaxStrategy::score_moves(&board, Mark::X);
        assert_eq!(for_x.iter().find(|(i, _)| *i == 5), Some(&(5, 1)));
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // Every opening move draws under perfect play.
        let scores = MinimaxStrategy::score_moves(&Board::new(), Mark::X);
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|(_, s)| *s == 0));
        assert_eq!(pick(MinimaxStrategy::strong(), &Board::new(), Mark::X), Some(0));
        assert_eq!(pick(MinimaxStrategy::inverted(), &Board::new(), Mark::X), Some(0));
    }

    #[test]
    fn test_inverted_avoids_the_win() {
        let board = Board::from_cells([O, O, E, X, X, E, E, E, E]);
        let choice = pick(MinimaxStrategy::inverted(), &board, Mark::O);
        assert_ne!(choice, Some(2));
        // First losing cell in index order.
        assert_eq!(choice, Some(6));
    }

    #[test]
    fn test_board_is_not_modified() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, E]);
        let before = board;
        pick(MinimaxStrategy::strong(), &board, Mark::X);
        pick(MinimaxStrategy::inverted(), &board, Mark::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_or_finished_board() {
        let full = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(pick(MinimaxStrategy::strong(), &full, Mark::O), None);
        assert_eq!(pick(MinimaxStrategy::inverted(), &full, Mark::O), None);
    }
}
