//! Board coordinates: a (column, row) pair, both 1-indexed.

use std::fmt;

/// Number of columns (files) and rows (ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A cell coordinate, packed into a `u8`.
///
/// Index = (row - 1) * 8 + (col - 1), so a1 = 0, b1 = 1, ..., h8 = 63.
/// Construction always goes through a range check, so every `Square` is on
/// the board.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a 1-indexed column and row.
    ///
    /// Returns `None` if either axis falls outside `1..=8`. Takes signed
    /// input so that callers can probe neighbours without underflow.
    #[inline]
    pub const fn new(col: i8, row: i8) -> Option<Square> {
        if col < 1 || col > BOARD_SIZE as i8 || row < 1 || row > BOARD_SIZE as i8 {
            return None;
        }
        Some(Square((row as u8 - 1) * BOARD_SIZE + (col as u8 - 1)))
    }

    /// Parse an algebraic coordinate such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::new((file_byte - b'a' + 1) as i8, (rank_byte - b'0') as i8)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the 1-indexed column (a = 1).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE + 1
    }

    /// Return the 1-indexed row (rank number).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE + 1
    }

    /// Return the square shifted by the given deltas, or `None` off the board.
    #[inline]
    pub const fn offset(self, d_col: i8, d_row: i8) -> Option<Square> {
        Square::new(self.col() as i8 + d_col, self.row() as i8 + d_row)
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col() - 1) as char;
        write!(f, "{file}{}", self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
