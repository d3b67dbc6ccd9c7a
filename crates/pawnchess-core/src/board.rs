//! The 8x8 grid of cells.

use std::fmt;

use tracing::trace;

use crate::cell::Cell;
use crate::color::Color;
use crate::side::Side;
use crate::square::{BOARD_SIZE, Square};

/// The board: 64 cells whose shape never changes after construction.
///
/// Only occupancy and first-move flags mutate. The win-cell flag is fixed
/// on ranks 1 and 8.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; Square::COUNT],
}

impl Board {
    /// Return an empty board with the back ranks marked as win cells.
    pub fn empty() -> Board {
        let mut cells = [Cell::default(); Square::COUNT];
        for sq in Square::all() {
            cells[sq.index()] = Cell::empty(sq.row() == 1 || sq.row() == BOARD_SIZE);
        }
        Board { cells }
    }

    /// Return the starting position: White fills rank 2, Black fills rank 7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for sq in Square::all() {
            for color in Color::ALL {
                if sq.row() == color.home_row() {
                    board.place(sq, color, true);
                }
            }
        }
        board
    }

    /// Look up a cell by 1-indexed column and row.
    ///
    /// Off-board coordinates yield `None` rather than an error; scanning
    /// code probes past the edges routinely.
    #[inline]
    pub fn lookup(&self, col: i8, row: i8) -> Option<&Cell> {
        Square::new(col, row).map(|sq| self.cell(sq))
    }

    /// Return the cell at a known-valid square.
    #[inline]
    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.index()]
    }

    /// Return the side whose pawn stands on `sq`, if any.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<Color> {
        self.cell(sq).occupant()
    }

    /// Return `true` if `sq` holds a pawn.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cell(sq).is_occupied()
    }

    /// Number of pawns on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Squares holding a pawn of `color`, in index order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.cell(sq).is_occupied_by(color))
    }

    /// Move the pawn on `from` to `to` on behalf of `side`.
    ///
    /// No legality checking happens here. The pawn loses its first-move
    /// eligibility, the source becomes empty, and `side` is flagged as the
    /// winner if `to` is a win cell.
    pub fn apply_move(&mut self, from: Square, to: Square, side: &mut Side) {
        if self.cell(to).is_win_cell() {
            side.set_won();
        }

        self.cells[to.index()].place(side.color(), false);
        self.cells[from.index()].clear();
        side.remove_piece(from);
        side.add_piece(to);

        trace!(%from, %to, color = %side.color(), "pawn moved");
    }

    /// Put a pawn on `sq`, replacing anything there.
    pub(crate) fn place(&mut self, sq: Square, color: Color, first_move: bool) {
        self.cells[sq.index()].place(color, first_move);
    }

    /// Empty `sq`.
    pub(crate) fn clear(&mut self, sq: Square) {
        self.cells[sq.index()].clear();
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self.pretty())
    }
}

/// Wrapper for pretty-printing a board as a boxed 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let delimiter = format!("  {}+", "+---".repeat(BOARD_SIZE as usize));

        writeln!(f, "{delimiter}")?;
        for row in (1..=BOARD_SIZE as i8).rev() {
            write!(f, "{row} |")?;
            for col in 1..=BOARD_SIZE as i8 {
                let c = board
                    .lookup(col, row)
                    .and_then(Cell::occupant)
                    .map_or(' ', Color::tag);
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{delimiter}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
