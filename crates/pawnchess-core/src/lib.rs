//! Core types for pawns-only chess: board, sides, move legality, and game rules.

mod board;
mod cell;
mod chess_move;
mod color;
mod error;
mod game;
mod position;
mod side;
mod square;

pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use chess_move::Move;
pub use color::Color;
pub use error::{MoveError, ParseMoveError, PositionError};
pub use game::{Game, MoveKind, Outcome};
pub use position::STARTING_POSITION;
pub use side::Side;
pub use square::{BOARD_SIZE, Square};
