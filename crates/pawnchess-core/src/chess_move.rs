//! A move request: a source and a destination square.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoveError;
use crate::square::Square;

/// A pawn move as typed by a player, e.g. `e2e4`.
///
/// Parsing only checks the shape of the text. Whether the move is legal is
/// decided by [`Game::play`](crate::Game::play).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Return the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Return the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseMoveError::WrongLength {
                found: s.chars().count(),
            });
        }

        let (src, dst) = s.split_at(2);
        let parse = |part: &str| {
            Square::from_algebraic(part).ok_or_else(|| ParseMoveError::InvalidSquare {
                found: part.to_string(),
            })
        };

        Ok(Move::new(parse(src)?, parse(dst)?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
