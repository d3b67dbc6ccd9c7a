//! Interactive console session: prompts, turn loop, and announcements.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use pawnchess_core::{Color, Game, Outcome, STARTING_POSITION};

use crate::command::{Command, parse_command};
use crate::error::CliError;

/// Settings for a console session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name used for White when the first name prompt gets no answer.
    pub white_name: String,
    /// Name used for Black when the second name prompt gets no answer.
    pub black_name: String,
    /// Starting position in position notation.
    pub position: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            white_name: Color::White.to_string(),
            black_name: Color::Black.to_string(),
            position: STARTING_POSITION.to_string(),
        }
    }
}

/// A console game between two players sharing one input stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with the default configuration.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, SessionConfig::default())
    }

    /// Create a session with an explicit configuration.
    pub fn with_config(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run the session until the game ends, a player exits, or input closes.
    ///
    /// Returns the outcome if the game was played to the end, or `None` if
    /// it was abandoned.
    pub fn run(mut self) -> Result<Option<Outcome>, CliError> {
        let mut game: Game = self.config.position.parse()?;

        writeln!(self.output, "Pawns-Only Chess")?;
        for (color, prompt) in [
            (Color::White, "First Player's name:"),
            (Color::Black, "Second Player's name:"),
        ] {
            writeln!(self.output, "{prompt}")?;
            let name = match self.read_line()? {
                Some(line) if !line.trim().is_empty() => line.trim().to_string(),
                _ => match color {
                    Color::White => self.config.white_name.clone(),
                    Color::Black => self.config.black_name.clone(),
                },
            };
            game.set_name(color, name);
        }
        info!(
            white = game.side(Color::White).name(),
            black = game.side(Color::Black).name(),
            "game started"
        );

        self.render(&game)?;
        loop {
            writeln!(self.output, "{}'s turn:", game.side(game.to_move()).name())?;

            let Some(line) = self.read_line()? else {
                debug!("input closed");
                writeln!(self.output, "Bye!")?;
                return Ok(None);
            };

            let mv = match parse_command(&line) {
                Ok(Command::Move(mv)) => mv,
                Ok(Command::Exit) => {
                    writeln!(self.output, "Bye!")?;
                    return Ok(None);
                }
                Err(e) => {
                    warn!(error = %e, "rejected input");
                    writeln!(self.output, "Invalid Input")?;
                    continue;
                }
            };

            match game.play(mv) {
                Ok(None) => self.render(&game)?,
                Ok(Some(outcome)) => {
                    self.render(&game)?;
                    match outcome {
                        Outcome::Win(color) => writeln!(self.output, "{color} Wins!")?,
                        Outcome::Stalemate => writeln!(self.output, "Stalemate!")?,
                    }
                    writeln!(self.output, "Bye!")?;
                    return Ok(Some(outcome));
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Read one line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn render(&mut self, game: &Game) -> Result<(), CliError> {
        writeln!(self.output, "{}", game.board().pretty())?;
        writeln!(self.output)?;
        Ok(())
    }
}
