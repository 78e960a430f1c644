//! Uniformly random move selection.

use super::MoveStrategy;
use crate::{Board, CellIndex, Mark};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks any empty cell with equal probability. No look-ahead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        _mark: Mark,
        rng: &mut R,
    ) -> Option<CellIndex> {
        board.empty_cells().choose(rng).copied()
    }
}
