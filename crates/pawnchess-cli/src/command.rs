//! Player input parsing.

use pawnchess_core::Move;

use crate::error::CliError;

/// The token that ends the session.
pub const EXIT_TOKEN: &str = "exit";

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `e2e4` and friends -- a move request for the side to move.
    Move(Move),
    /// `exit` -- leave the game immediately.
    Exit,
}

/// Parse a single line of player input into a [`Command`].
///
/// Input is case-insensitive. Anything that is not `exit` or a pair of
/// `[a-h][1-8]` coordinates is rejected before it reaches the rules.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let input = line.trim().to_lowercase();
    if input == EXIT_TOKEN {
        return Ok(Command::Exit);
    }

    input
        .parse::<Move>()
        .map(Command::Move)
        .map_err(|_| CliError::InvalidInput { input })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_exit() {
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
        assert_eq!(parse_command("  EXIT\n").unwrap(), Command::Exit);
    }

    #[test]
    fn parse_move() {
        match parse_command("e2e4").unwrap() {
            Command::Move(mv) => assert_eq!(mv.to_string(), "e2e4"),
            other => panic!("expected Move, got {other:?}"),
        }
    }

    #[test]
    fn parse_move_uppercase() {
        assert!(matches!(parse_command("D7D5\n").unwrap(), Command::Move(_)));
    }

    #[test]
    fn parse_malformed() {
        for line in ["", "e2", "e2e9", "i2i4", "e2-e4", "quit", "e2e4e5"] {
            assert!(
                matches!(parse_command(line), Err(CliError::InvalidInput { .. })),
                "{line:?} should be malformed"
            );
        }
    }

    #[test]
    fn malformed_input_is_reported_lowercased() {
        match parse_command(" Hello ") {
            Err(CliError::InvalidInput { input }) => assert_eq!(input, "hello"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
