//! The turn controller: move validation, application, and end-of-game checks.

use tracing::{debug, info};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::MoveError;
use crate::side::Side;
use crate::square::Square;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given side reached the far rank or captured every enemy pawn.
    Win(Color),
    /// The side to move still has pawns but none of them can move.
    Stalemate,
}

/// A move that passed validation, with the data needed to apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// One cell straight ahead onto an empty cell.
    Step,
    /// Two cells straight ahead from the home rank. `passed` is the skipped cell.
    DoubleStep { passed: Square },
    /// One cell diagonally forward onto an enemy pawn.
    Capture,
    /// One cell diagonally forward onto the enemy's en-passant target.
    /// `captured` is the cell of the pawn that gets removed.
    EnPassant { captured: Square },
}

/// A game in progress: the board, both sides, and whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    sides: [Side; Color::COUNT],
    to_move: Color,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a new game from the standard position with White to move.
    pub fn new(white_name: impl Into<String>, black_name: impl Into<String>) -> Game {
        let mut game = Game::from_board(Board::starting_position(), Color::White);
        game.sides[Color::White.index()].set_name(white_name);
        game.sides[Color::Black.index()].set_name(black_name);
        game
    }

    /// Set up a game from an arbitrary board.
    ///
    /// Each side's pawn registry is rebuilt from the board and both
    /// en-passant windows start closed. Players are named after their color.
    pub fn from_board(board: Board, to_move: Color) -> Game {
        let sides = Color::ALL.map(|color| {
            let mut side = Side::new(color.to_string(), color);
            for sq in board.squares_of(color) {
                side.add_piece(sq);
            }
            side
        });

        Game {
            board,
            sides,
            to_move,
            outcome: None,
        }
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the registry for `color`.
    #[inline]
    pub fn side(&self, color: Color) -> &Side {
        &self.sides[color.index()]
    }

    /// Rename the player of `color`.
    pub fn set_name(&mut self, color: Color, name: impl Into<String>) {
        self.sides[color.index()].set_name(name);
    }

    /// Return the side to move.
    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Return the outcome once the game has ended.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Return `true` once the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Check `mv` for the side to move without changing anything.
    pub fn validate(&self, mv: Move) -> Result<MoveKind, MoveError> {
        let us = self.to_move;
        let them = us.flip();
        let (from, to) = (mv.from(), mv.to());
        let src = self.board.cell(from);
        let dst = self.board.cell(to);

        if !src.is_occupied_by(us) {
            return Err(MoveError::NoPawn {
                color: us,
                square: from,
            });
        }

        let horizontal = (from.col() as i8 - to.col() as i8).abs();
        let forward = (to.row() as i8 - from.row() as i8) * us.forward();
        if forward <= 0 {
            return Err(MoveError::InvalidDirection);
        }

        match (horizontal, forward) {
            (0, 1) if !dst.is_occupied() => Ok(MoveKind::Step),
            (0, 2) if !dst.is_occupied() && src.is_first_move_eligible() => {
                let passed = from.offset(0, us.forward()).ok_or(MoveError::InvalidMove)?;
                if self.board.is_occupied(passed) {
                    return Err(MoveError::InvalidMove);
                }
                Ok(MoveKind::DoubleStep { passed })
            }
            (1, 1) if dst.is_occupied_by(them) => Ok(MoveKind::Capture),
            (1, 1) if self.side(them).is_en_passant_target(to) => {
                // The pawn that skipped `to` sits one rank behind it from our side.
                let captured = to.offset(0, -us.forward()).ok_or(MoveError::InvalidMove)?;
                Ok(MoveKind::EnPassant { captured })
            }
            _ => Err(MoveError::InvalidMove),
        }
    }

    /// Play `mv` for the side to move.
    ///
    /// On success the move is applied and the game is evaluated: the result
    /// is `Some(outcome)` if the game just ended, otherwise `None` and the
    /// turn has passed to the opponent. On error nothing has changed and
    /// the same side is still to move.
    pub fn play(&mut self, mv: Move) -> Result<Option<Outcome>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let kind = match self.validate(mv) {
            Ok(kind) => kind,
            Err(e) => {
                debug!(%mv, color = %self.to_move, error = %e, "move rejected");
                return Err(e);
            }
        };

        let us = self.to_move;
        let them = us.flip();
        let [white, black] = &mut self.sides;
        let (mover, rival) = match us {
            Color::White => (white, black),
            Color::Black => (black, white),
        };

        match kind {
            MoveKind::Step => {}
            MoveKind::DoubleStep { passed } => mover.open_en_passant(passed),
            MoveKind::Capture => {
                rival.remove_piece(mv.to());
            }
            MoveKind::EnPassant { captured } => {
                self.board.clear(captured);
                rival.remove_piece(captured);
                debug!(%mv, %captured, "en passant capture");
            }
        }
        self.board.apply_move(mv.from(), mv.to(), mover);
        debug!(%mv, color = %us, ?kind, "move applied");

        let outcome = if self.side(us).has_won() || self.side(them).pieces().is_empty() {
            Some(Outcome::Win(us))
        } else if !self.has_moves(them) {
            Some(Outcome::Stalemate)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                info!(?outcome, "game over");
                self.outcome = Some(outcome);
            }
            None => {
                // The opponent's own window expires as its turn begins.
                self.sides[them.index()].close_en_passant();
                self.to_move = them;
            }
        }

        Ok(outcome)
    }

    /// Return `true` if `color` has at least one legal move.
    ///
    /// A pawn can move if the cell straight ahead is on the board and
    /// empty, or if a forward diagonal holds an enemy pawn or the enemy's
    /// en-passant target.
    pub fn has_moves(&self, color: Color) -> bool {
        let rival = self.side(color.flip());
        let fwd = color.forward();

        self.side(color).pieces().iter().any(|&sq| {
            let ahead_free = sq
                .offset(0, fwd)
                .is_some_and(|ahead| !self.board.is_occupied(ahead));

            ahead_free
                || [-1, 1]
                    .into_iter()
                    .filter_map(|d_col| sq.offset(d_col, fwd))
                    .any(|diag| {
                        self.board.cell(diag).is_occupied_by(rival.color())
                            || rival.is_en_passant_target(diag)
                    })
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Color::White.to_string(), Color::Black.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, MoveKind, Outcome};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    fn position(notation: &str) -> Game {
        notation.parse().unwrap()
    }

    #[test]
    fn single_step_then_no_pawn_at_source() {
        let mut game = Game::default();
        assert_eq!(game.play(mv("e2e3")), Ok(None));
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(game.play(mv("a7a6")), Ok(None));
        assert_eq!(
            game.play(mv("e2e3")),
            Err(MoveError::NoPawn {
                color: Color::White,
                square: sq("e2")
            })
        );
        assert_eq!(game.to_move(), Color::White);
    }

    #[test]
    fn cannot_move_opponent_pawn() {
        let mut game = Game::default();
        assert!(matches!(
            game.play(mv("e7e5")),
            Err(MoveError::NoPawn { color: Color::White, .. })
        ));
    }

    #[test]
    fn double_step_only_once() {
        let mut game = Game::default();
        assert_eq!(game.validate(mv("e2e4")), Ok(MoveKind::DoubleStep { passed: sq("e3") }));
        game.play(mv("e2e4")).unwrap();
        game.play(mv("a7a6")).unwrap();
        assert_eq!(game.play(mv("e4e6")), Err(MoveError::InvalidMove));
    }

    #[test]
    fn triple_step_rejected() {
        let game = Game::default();
        assert_eq!(game.validate(mv("e2e5")), Err(MoveError::InvalidMove));
    }

    #[test]
    fn backwards_and_sideways_rejected() {
        let mut game = Game::default();
        game.play(mv("e2e4")).unwrap();
        game.play(mv("a7a6")).unwrap();
        assert_eq!(game.validate(mv("e4e3")), Err(MoveError::InvalidDirection));
        assert_eq!(game.validate(mv("e4f4")), Err(MoveError::InvalidDirection));
        assert_eq!(game.validate(mv("e4e4")), Err(MoveError::InvalidDirection));
    }

    #[test]
    fn black_moves_down() {
        let mut game = Game::default();
        game.play(mv("e2e3")).unwrap();
        assert_eq!(game.validate(mv("d7d8")), Err(MoveError::InvalidDirection));
        assert_eq!(game.validate(mv("d7d5")), Ok(MoveKind::DoubleStep { passed: sq("d6") }));
        assert_eq!(game.validate(mv("d7d6")), Ok(MoveKind::Step));
    }

    #[test]
    fn straight_move_into_pawn_rejected() {
        let game = position("8/pppppppp/8/8/8/4p3/PPPPPPPP/8 w");
        assert_eq!(game.validate(mv("e2e3")), Err(MoveError::InvalidMove));
        assert_eq!(game.validate(mv("d2e3")), Ok(MoveKind::Capture));
    }

    #[test]
    fn double_step_through_pawn_rejected() {
        let game = position("8/pppppppp/8/8/8/4p3/PPPPPPPP/8 w");
        assert_eq!(game.validate(mv("e2e4")), Err(MoveError::InvalidMove));
    }

    #[test]
    fn diagonal_onto_empty_or_own_rejected() {
        let game = Game::default();
        assert_eq!(game.validate(mv("e2f3")), Err(MoveError::InvalidMove));
        assert_eq!(game.validate(mv("e2c4")), Err(MoveError::InvalidMove));
    }

    #[test]
    fn direct_capture_removes_piece() {
        let mut game = position("8/pppp1ppp/8/4p3/3P4/8/PPP1PPPP/8 w");
        game.play(mv("d4e5")).unwrap();
        assert_eq!(game.board().occupant(sq("e5")), Some(Color::White));
        assert_eq!(game.board().occupant(sq("d4")), None);
        assert!(!game.side(Color::Black).has_piece_on(sq("e5")));
        assert!(game.side(Color::White).has_piece_on(sq("e5")));
        assert_eq!(game.side(Color::Black).pieces().len(), 7);
    }

    #[test]
    fn en_passant_capture() {
        let mut game = position("8/p7/8/8/3p4/8/4P2P/8 w");
        game.play(mv("e2e4")).unwrap();
        assert_eq!(game.side(Color::White).en_passant(), Some(sq("e3")));
        assert_eq!(
            game.validate(mv("d4e3")),
            Ok(MoveKind::EnPassant { captured: sq("e4") })
        );

        game.play(mv("d4e3")).unwrap();
        assert_eq!(game.board().occupant(sq("e4")), None);
        assert_eq!(game.board().occupant(sq("e3")), Some(Color::Black));
        assert!(!game.side(Color::White).has_piece_on(sq("e4")));
        assert_eq!(game.side(Color::White).en_passant(), None);
    }

    #[test]
    fn en_passant_window_expires() {
        let mut game = position("8/p7/8/8/3p4/8/4P2P/8 w");
        game.play(mv("e2e4")).unwrap();
        game.play(mv("a7a6")).unwrap();
        assert_eq!(game.side(Color::White).en_passant(), None);
        game.play(mv("h2h3")).unwrap();
        assert_eq!(game.play(mv("d4e3")), Err(MoveError::InvalidMove));
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut game = position("8/p7/8/8/3p4/8/4P2P/8 w");
        game.play(mv("e2e4")).unwrap();
        let before = game.board().clone();
        assert!(game.play(mv("d4c3")).is_err());
        assert_eq!(game.board(), &before);
        assert_eq!(game.side(Color::White).en_passant(), Some(sq("e3")));
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn reaching_back_rank_wins() {
        let mut game = position("8/3P4/8/8/8/8/p7/8 w");
        assert_eq!(game.play(mv("d7d8")), Ok(Some(Outcome::Win(Color::White))));
        assert!(game.is_over());
        assert_eq!(game.play(mv("a2a1")), Err(MoveError::GameOver));
    }

    #[test]
    fn capturing_last_pawn_wins() {
        let mut game = position("8/8/8/3p4/4P3/8/8/8 w");
        assert_eq!(game.play(mv("e4d5")), Ok(Some(Outcome::Win(Color::White))));
        assert!(game.side(Color::Black).pieces().is_empty());
    }

    #[test]
    fn stalemate_detected() {
        let mut game = position("8/8/8/4p3/4P3/8/7P/8 w");
        assert_eq!(game.play(mv("h2h3")), Ok(Some(Outcome::Stalemate)));
        assert_eq!(game.outcome(), Some(Outcome::Stalemate));
    }

    #[test]
    fn stalemate_avoided_by_en_passant() {
        // Black's d4 pawn is blocked; only White's double step gives it a capture.
        let mut game = position("8/8/8/8/3p4/3P4/4P3/8 w");
        assert_eq!(game.play(mv("e2e4")), Ok(None));
        assert_eq!(
            game.validate(mv("d4e3")),
            Ok(MoveKind::EnPassant { captured: sq("e4") })
        );

        let mut game = position("8/8/8/8/3p4/3P4/7P/8 w");
        assert_eq!(game.play(mv("h2h3")), Ok(Some(Outcome::Stalemate)));
    }

    #[test]
    fn has_moves_ignores_off_board_probes() {
        let game = position("8/8/8/8/8/8/P7/8 w");
        assert!(game.has_moves(Color::White));
        assert!(!game.has_moves(Color::Black));
    }
}
