//! Core domain types for tic-tac-toe.

use crate::GameError;
use serde::{Deserialize, Serialize};

/// Index of a cell on the board (0-8, row-major).
pub type CellIndex = usize;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Three cell indices forming a row, column, or diagonal.
pub type Line = [CellIndex; 3];

/// The eight lines whose uniform occupation ends a round.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A player identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// The human player.
    X,
    /// The computer player.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// A plain value: copying it is how the search explores speculative moves,
/// so the live board is never touched by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit cells, row-major.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index, `None` when out of range.
    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// - [`GameError::IndexOutOfRange`] if `index` is not in 0..=8.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark; the
    ///   board is left unchanged.
    pub fn place(&mut self, index: CellIndex, mark: Mark) -> Result<(), GameError> {
        match self.cells.get_mut(index) {
            None => Err(GameError::IndexOutOfRange { index }),
            Some(Cell::Marked(_)) => Err(GameError::CellOccupied { index }),
            Some(cell) => {
                *cell = Cell::Marked(mark);
                Ok(())
            }
        }
    }

    /// Checks if a cell is empty. Out-of-range indices are not empty.
    pub fn is_empty(&self, index: CellIndex) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<CellIndex> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns the mark holding all three cells of `line`, if any.
    pub fn line_holder(&self, line: Line) -> Option<Mark> {
        let [a, b, c] = line;
        match self.get(a)? {
            Cell::Marked(mark)
                if self.get(b)? == Cell::Marked(mark) && self.get(c)? == Cell::Marked(mark) =>
            {
                Some(mark)
            }
            _ => None,
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so players can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
