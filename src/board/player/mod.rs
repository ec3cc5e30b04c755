//! Per-side view of a board.
//!
//! A [`Player`] borrows the board and reads the state derived for its side
//! when the board was built. It never changes; making a move yields a
//! [`MoveTransition`] holding a new board.

pub(crate) mod castling;
mod transition;

use std::fmt;

use log::{trace, warn};

use super::state::PlayerState;
use super::{Alliance, Board, Move, Piece};

pub use transition::{MoveStatus, MoveTransition};

/// One side of a board.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, alliance: Alliance) -> Self {
        Player { board, alliance }
    }

    fn state(&self) -> &'a PlayerState {
        self.board.player_state(self.alliance)
    }

    #[inline]
    #[must_use]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[must_use]
    pub fn king(&self) -> &'a Piece {
        &self.state().king
    }

    /// Pseudo-legal moves of this side plus its available castles
    #[must_use]
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.state().legal_moves
    }

    #[must_use]
    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.alliance)
    }

    #[must_use]
    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.alliance.opponent())
    }

    /// Castles currently on offer
    pub fn castle_moves(&self) -> impl Iterator<Item = &'a Move> {
        self.legal_moves().iter().filter(|mv| mv.is_castling_move())
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.state().in_check
    }

    #[must_use]
    pub fn is_castled(&self) -> bool {
        self.king().is_castled()
    }

    /// Returns true if at least one legal move goes through.
    ///
    /// Computed on first use and cached on the board.
    #[must_use]
    pub fn has_escape_moves(&self) -> bool {
        *self.state().has_escape_moves.get_or_init(|| {
            self.legal_moves()
                .iter()
                .any(|mv| self.make_move(mv).status().is_done())
        })
    }

    #[must_use]
    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    #[must_use]
    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// Attempt `mv` for this side.
    ///
    /// Moves outside [`Player::legal_moves`] are rejected without being
    /// executed, as are moves that leave this side's king attacked.
    #[must_use]
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.legal_moves().contains(mv) {
            trace!("{} rejected {mv}: not a legal move", self.alliance);
            return MoveTransition::rejected(self.board, mv.clone(), MoveStatus::IllegalMove);
        }

        match mv.execute(self.board) {
            Ok(next) => {
                if next.player(self.alliance).is_in_check() {
                    trace!("{} rejected {mv}: king left in check", self.alliance);
                    MoveTransition::rejected(
                        self.board,
                        mv.clone(),
                        MoveStatus::LeavesPlayerInCheck,
                    )
                } else {
                    MoveTransition::done(self.board, next, mv.clone())
                }
            }
            Err(err) => {
                warn!("{} could not execute {mv}: {err}", self.alliance);
                MoveTransition::rejected(self.board, mv.clone(), MoveStatus::IllegalMove)
            }
        }
    }
}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alliance)
    }
}
