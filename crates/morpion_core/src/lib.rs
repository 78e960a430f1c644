//! Morpion core - tic-tac-toe against the computer.
//!
//! Pure game logic with no I/O: the board, the rules deciding when a round
//! ends, the computer's move strategies, and the session state machine that
//! ties them together. Front ends render [`Board`] snapshots, feed cell
//! indices into a [`Session`], and receive round results through a
//! [`ScoreSink`].
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s with occupancy and line queries
//! - **Rules**: [`rules::evaluate`] derives an [`Outcome`] from a board
//! - **Strategies**: [`RandomStrategy`] and [`MinimaxStrategy`], selected by
//!   [`Difficulty`]
//! - **Session**: turn-taking between the human (`X`) and the computer (`O`)
//!
//! # Example
//!
//! ```
//! use morpion_core::{Difficulty, Outcome, Session, Tally};
//!
//! let mut session = Session::seeded(Tally::new(), Difficulty::Strong, 7);
//! assert_eq!(session.apply_human_move(4)?, Outcome::InProgress);
//! session.run_computer_turn()?;
//! assert_eq!(session.current_board().empty_cells().len(), 7);
//! # Ok::<(), morpion_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod outcome;
mod position;
pub mod rules;
mod score;
mod session;
mod strategy;
mod types;

pub use error::GameError;
pub use outcome::{Outcome, RoundResult};
pub use position::Position;
pub use score::{ScoreSink, Tally};
pub use session::{COMPUTER, HUMAN, Phase, Session};
pub use strategy::{Difficulty, MinimaxStrategy, MoveStrategy, RandomStrategy, RootPolicy};
pub use types::{Board, CELL_COUNT, Cell, CellIndex, LINES, Line, Mark};
