//! Per-side registry: live pawns, the en-passant window, and the win flag.

use std::collections::BTreeSet;

use crate::color::Color;
use crate::square::Square;

/// Bookkeeping for one player.
///
/// `pieces` records which cells hold this side's pawns; the cells
/// themselves belong to the [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    name: String,
    color: Color,
    win: bool,
    pieces: BTreeSet<Square>,
    en_passant: Option<Square>,
}

impl Side {
    /// Create a side with no pawns.
    pub fn new(name: impl Into<String>, color: Color) -> Side {
        Side {
            name: name.into(),
            color,
            win: false,
            pieces: BTreeSet::new(),
            en_passant: None,
        }
    }

    /// The player's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the player.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Return `true` once a pawn of this side has reached the far rank.
    #[inline]
    pub fn has_won(&self) -> bool {
        self.win
    }

    /// Squares currently holding this side's pawns.
    #[inline]
    pub fn pieces(&self) -> &BTreeSet<Square> {
        &self.pieces
    }

    /// Return `true` if this side has a pawn on `sq`.
    #[inline]
    pub fn has_piece_on(&self, sq: Square) -> bool {
        self.pieces.contains(&sq)
    }

    /// The cell this side's pawn skipped with a double step on its last
    /// turn, which the opponent may capture onto this turn only.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return `true` if `sq` is this side's open en-passant target.
    #[inline]
    pub fn is_en_passant_target(&self, sq: Square) -> bool {
        self.en_passant == Some(sq)
    }

    pub(crate) fn set_won(&mut self) {
        self.win = true;
    }

    pub(crate) fn add_piece(&mut self, sq: Square) {
        self.pieces.insert(sq);
    }

    pub(crate) fn remove_piece(&mut self, sq: Square) -> bool {
        self.pieces.remove(&sq)
    }

    pub(crate) fn open_en_passant(&mut self, sq: Square) {
        self.en_passant = Some(sq);
    }

    pub(crate) fn close_en_passant(&mut self) {
        self.en_passant = None;
    }
}
