//! Outcome of attempting a move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};

/// Whether a move attempt went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStatus {
    Done,
    /// The move is not among the player's legal moves
    IllegalMove,
    /// The move would leave the mover's king attacked
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done"),
            MoveStatus::IllegalMove => write!(f, "illegal move"),
            MoveStatus::LeavesPlayerInCheck => write!(f, "leaves player in check"),
        }
    }
}

/// Result of [`Player::make_move`](super::Player::make_move).
///
/// Borrows the board the move was attempted on and owns the new board only
/// when the move went through.
#[derive(Debug)]
pub struct MoveTransition<'a> {
    from_board: &'a Board,
    to_board: Option<Board>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn done(from_board: &'a Board, to_board: Board, mv: Move) -> Self {
        MoveTransition {
            from_board,
            to_board: Some(to_board),
            mv,
            status: MoveStatus::Done,
        }
    }

    pub(crate) fn rejected(from_board: &'a Board, mv: Move, status: MoveStatus) -> Self {
        MoveTransition {
            from_board,
            to_board: None,
            mv,
            status,
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> MoveStatus {
        self.status
    }

    /// The move that was attempted
    #[inline]
    #[must_use]
    pub const fn attempted_move(&self) -> &Move {
        &self.mv
    }

    /// The board the move was attempted on
    #[inline]
    #[must_use]
    pub const fn from_board(&self) -> &'a Board {
        self.from_board
    }

    /// The new board on success, otherwise the original
    #[must_use]
    pub fn transition_board(&self) -> &Board {
        self.to_board.as_ref().unwrap_or(self.from_board)
    }

    /// Owned version of [`MoveTransition::transition_board`]; clones the
    /// original when the move was rejected.
    #[must_use]
    pub fn into_board(self) -> Board {
        match self.to_board {
            Some(board) => board,
            None => self.from_board.clone(),
        }
    }
}

impl fmt::Display for MoveTransition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.mv, self.status)
    }
}
