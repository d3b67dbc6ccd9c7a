//! A single board cell and the pawn (if any) standing on it.

use crate::color::Color;

/// One of the 64 cells of the board.
///
/// Cells are the stable entities of the game: a pawn has no identity of its
/// own beyond the cell it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    occupant: Option<Color>,
    first_move: bool,
    win_cell: bool,
}

impl Cell {
    /// An empty cell, optionally on a back rank.
    pub(crate) const fn empty(win_cell: bool) -> Cell {
        Cell {
            occupant: None,
            first_move: false,
            win_cell,
        }
    }

    /// The side whose pawn stands here, if any.
    #[inline]
    pub fn occupant(&self) -> Option<Color> {
        self.occupant
    }

    /// Return `true` if a pawn stands here.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Return `true` if a pawn of `color` stands here.
    #[inline]
    pub fn is_occupied_by(&self, color: Color) -> bool {
        self.occupant == Some(color)
    }

    /// Return `true` while the pawn here has not moved yet.
    #[inline]
    pub fn is_first_move_eligible(&self) -> bool {
        self.first_move
    }

    /// Return `true` for cells on either back rank.
    #[inline]
    pub fn is_win_cell(&self) -> bool {
        self.win_cell
    }

    /// Put a pawn on this cell.
    pub(crate) fn place(&mut self, color: Color, first_move: bool) {
        self.occupant = Some(color);
        self.first_move = first_move;
    }

    /// Remove whatever stands here. The win-cell flag is untouched.
    pub(crate) fn clear(&mut self) {
        self.occupant = None;
        self.first_move = false;
    }
}
