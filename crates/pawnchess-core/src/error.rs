//! Error types for move parsing, move legality, and position notation.

use crate::color::Color;
use crate::square::Square;

/// Reasons a move request is rejected. A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The source square does not hold a pawn of the side to move.
    #[error("No {color} pawn at {square}")]
    NoPawn {
        /// The side that tried to move.
        color: Color,
        /// The requested source square.
        square: Square,
    },
    /// The destination is not ahead of the source from the mover's side.
    #[error("Invalid Input")]
    InvalidDirection,
    /// The displacement does not describe a legal step or capture.
    #[error("Invalid Input")]
    InvalidMove,
    /// The game has already been decided.
    #[error("the game is over")]
    GameOver,
}

/// Errors that occur when parsing a move string such as `"e2e4"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    /// The input is not exactly two coordinates.
    #[error("expected 4 characters, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },
    /// One half of the input is not a coordinate in `[a-h][1-8]`.
    #[error("invalid square: \"{found}\"")]
    InvalidSquare {
        /// The offending two-character text.
        found: String,
    },
}

/// Errors that occur when parsing position notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The notation does not have exactly 2 space-separated fields.
    #[error("expected 2 fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 cells.
    #[error("rank {rank} describes {length} cells, expected 8")]
    BadRankLength {
        /// Rank number (8 for the first group, 1 for the last).
        rank: u8,
        /// Number of cells described.
        length: usize,
    },
    /// A character other than `P`, `p` or a digit 1-8 appeared in the placement.
    #[error("invalid placement character: '{character}'")]
    InvalidChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// A pawn stands on a back rank, so the game would already be over.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// The first offending square.
        square: Square,
    },
}
