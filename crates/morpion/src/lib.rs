//! Morpion - play tic-tac-toe against the computer in the terminal.
//!
//! The game rules and the computer's strategies live in [`morpion_core`];
//! this crate adds what a playable program needs around them:
//!
//! - **CLI**: [`Cli`] parsed with clap
//! - **Settings**: optional TOML file, see [`Settings`]
//! - **Scores**: results persisted as JSON by [`ScoreFile`]
//! - **Console**: a line-oriented front end, see [`Console`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod input;
mod score_file;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use console::Console;
pub use score_file::{ScoreFile, ScoreFileError};
