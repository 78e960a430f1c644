//! Line-oriented terminal front end.
//!
//! Renders the board, reads one command per line, and drives a [`Session`]:
//! the computer answers every human move until the round ends, then the
//! result is shown and the session reset, which records it.

use crate::input::Command;
use anyhow::Result;
use morpion_core::{CELL_COUNT, COMPUTER, HUMAN, Outcome, Position, ScoreSink, Session, Tally};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Terminal front end reading from `I` and writing to `W`.
pub struct Console<I, W> {
    input: I,
    output: W,
}

impl<I: BufRead, W: Write> Console<I, W> {
    /// Creates a console over the given streams.
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until the player quits or input ends.
    ///
    /// Returns the number of finished rounds.
    #[instrument(skip_all)]
    pub fn run<K, R>(&mut self, session: &mut Session<K, R>) -> Result<u32>
    where
        K: ScoreSink + AsRef<Tally>,
        R: Rng,
    {
        info!("Starting console game");
        writeln!(
            self.output,
            "You are {}. Enter a cell number (1-9) or name (e.g. \"center\"), \
             'd' to change difficulty, 's' for scores, 'q' to quit.",
            HUMAN
        )?;
        writeln!(self.output, "Difficulty: {}", session.difficulty().label())?;

        let mut rounds = 0;
        let mut buf = Vec::new();
        loop {
            writeln!(self.output, "\n{}", session.current_board().display())?;
            write!(self.output, "Your move: ")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if matches!(line, std::borrow::Cow::Owned(_)) {
                warn!("Input line is not valid UTF-8");
            }

            match Command::parse(&line) {
                Command::Quit => break,
                Command::ToggleDifficulty => {
                    let difficulty = session.difficulty().toggle();
                    session.set_strategy(difficulty);
                    writeln!(self.output, "Difficulty: {}", difficulty.label())?;
                }
                Command::Scores => self.show_scores(session.sink().as_ref())?,
                Command::Unknown(text) => {
                    writeln!(self.output, "Unrecognised input: {:?}", text)?;
                }
                Command::Move(position) => {
                    if self.play_turn(session, position)? {
                        session.reset();
                        rounds += 1;
                        writeln!(self.output, "\nNew round!")?;
                    }
                }
            }
        }

        info!(rounds, "Console game finished");
        Ok(rounds)
    }

    /// Plays the human move and the computer's answer. Returns true once
    /// the round is over.
    fn play_turn<K, R>(&mut self, session: &mut Session<K, R>, position: Position) -> Result<bool>
    where
        K: ScoreSink,
        R: Rng,
    {
        let outcome = match session.apply_human_move(position.to_index()) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(false);
            }
        };
        if outcome.is_terminal() {
            return self.announce(session.current_board().display(), outcome).map(|()| true);
        }

        let before = session.current_board();
        let outcome = session.run_computer_turn()?;
        let after = session.current_board();
        if let Some(played) = (0..CELL_COUNT)
            .find(|&i| before.is_empty(i) && !after.is_empty(i))
            .and_then(Position::from_index)
        {
            writeln!(self.output, "Computer ({}) plays {}", COMPUTER, played)?;
        }
        if outcome.is_terminal() {
            self.announce(after.display(), outcome)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn announce(&mut self, board: String, outcome: Outcome) -> Result<()> {
        writeln!(self.output, "\n{}\n", board)?;
        match outcome {
            Outcome::Win(mark) if mark == HUMAN => writeln!(self.output, "Player {} wins!", mark)?,
            Outcome::Win(mark) => writeln!(self.output, "The computer ({}) wins!", mark)?,
            Outcome::Draw => writeln!(self.output, "Draw!")?,
            Outcome::InProgress => {}
        }
        Ok(())
    }

    fn show_scores(&mut self, tally: &Tally) -> Result<()> {
        writeln!(
            self.output,
            "{}: {} | {}: {} | Draws: {}",
            HUMAN,
            tally.wins(HUMAN),
            COMPUTER,
            tally.wins(COMPUTER),
            tally.draws()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpion_core::{Difficulty, Mark};
    use std::io::Cursor;

    fn run_script(script: impl AsRef<[u8]>, difficulty: Difficulty) -> (u32, String, Tally) {
        let mut session = Session::seeded(Tally::new(), difficulty, 0);
        let mut console = Console::new(Cursor::new(script.as_ref().to_vec()), Vec::new());
        let rounds = console.run(&mut session).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (rounds, output, session.into_sink())
    }

    #[test]
    fn test_quit_immediately() {
        let (rounds, output, tally) = run_script("q\n", Difficulty::Strong);
        assert_eq!(rounds, 0);
        assert!(output.contains("1|2|3"));
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_computer_answers_each_move() {
        let (_, output, _) = run_script("5\n", Difficulty::Strong);
        assert!(output.contains("Computer (O) plays Top-left"));
        assert!(output.contains("O|2|3\n-+-+-\n4|X|6"));
    }

    #[test]
    fn test_strong_computer_wins_and_round_is_recorded() {
        // Cells are 1-based here: X plays 2, 3, 6, 8.
        let (rounds, output, tally) = run_script("2\n3\n6\n8\n", Difficulty::Strong);
        assert!(output.contains("The computer (O) wins!"));
        assert!(output.contains("New round!"));
        assert_eq!(rounds, 1);
        assert_eq!(tally.wins(Mark::O), 1);
    }

    #[test]
    fn test_rejected_moves_are_reported() {
        let (_, output, _) = run_script("5\n5\nnowhere\n", Difficulty::Strong);
        assert!(output.contains("Cell 5 is already occupied"));
        assert!(output.contains("Unrecognised input: \"nowhere\""));
    }

    #[test]
    fn test_toggle_and_scores() {
        let (_, output, _) = run_script("d\ns\n", Difficulty::Weak);
        assert!(output.contains("Difficulty: Hard"));
        assert!(output.contains("X: 0 | O: 0 | Draws: 0"));
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_and_play_continues() {
        let (rounds, output, _) = run_script(b"\xff\n5\nq\n", Difficulty::Strong);
        assert_eq!(rounds, 0);
        assert!(output.contains("Unrecognised input: \"\u{fffd}\""));
        assert!(output.contains("Computer (O) plays Top-left"));
    }
}
