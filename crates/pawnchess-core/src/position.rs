//! Position notation parsing and serialization for [`Game`].
//!
//! The notation is a cut-down FEN: eight `/`-separated ranks from rank 8
//! down to rank 1 (`P` White, `p` Black, digits for empty runs), a space,
//! then `w` or `b` for the side to move.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::PositionError;
use crate::game::Game;
use crate::square::{BOARD_SIZE, Square};

/// Notation for the standard starting position.
pub const STARTING_POSITION: &str = "8/pppppppp/8/8/8/8/PPPPPPPP/8 w";

impl FromStr for Game {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Game, PositionError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(PositionError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(PositionError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let row = BOARD_SIZE - rank_index as u8;
            let mut col: u8 = 1;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PositionError::InvalidChar { character: c });
                    }
                    col += digit as u8;
                    if col > BOARD_SIZE + 1 {
                        return Err(PositionError::BadRankLength {
                            rank: row,
                            length: col as usize - 1,
                        });
                    }
                    continue;
                }

                let color = match c {
                    'P' => Color::White,
                    'p' => Color::Black,
                    _ => return Err(PositionError::InvalidChar { character: c }),
                };

                let sq = Square::new(col as i8, row as i8).ok_or(PositionError::BadRankLength {
                    rank: row,
                    length: col as usize,
                })?;
                if sq.row() == 1 || sq.row() == BOARD_SIZE {
                    return Err(PositionError::PawnOnBackRank { square: sq });
                }

                board.place(sq, color, row == color.home_row());
                col += 1;
            }

            if col != BOARD_SIZE + 1 {
                return Err(PositionError::BadRankLength {
                    rank: row,
                    length: col as usize - 1,
                });
            }
        }

        let to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(PositionError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        Ok(Game::from_board(board, to_move))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board();

        for row in (1..=BOARD_SIZE as i8).rev() {
            let mut empty = 0;
            for col in 1..=BOARD_SIZE as i8 {
                match board.lookup(col, row).and_then(|cell| cell.occupant()) {
                    Some(color) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        let c = match color {
                            Color::White => 'P',
                            Color::Black => 'p',
                        };
                        write!(f, "{c}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row > 1 {
                write!(f, "/")?;
            }
        }

        let side = match self.to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        write!(f, " {side}")
    }
}
