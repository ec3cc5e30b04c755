//! Move types and move lookup.
//!
//! A `Move` is an immutable proposal. It does not hold on to the board it was
//! generated against; that board is passed back in when the move is executed
//! (see [`Move::execute`]).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::Board;

/// King and rook placement for a castle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Castle {
    pub king: Piece,
    pub king_destination: Square,
    pub rook: Piece,
    pub rook_destination: Square,
}

impl Castle {
    /// Square the rook starts from
    #[inline]
    #[must_use]
    pub const fn rook_start(&self) -> Square {
        self.rook.square()
    }
}

/// Every kind of move the engine knows about.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Non-pawn move to an empty square
    Major { piece: Piece, destination: Square },
    /// Non-pawn capture
    Attack {
        piece: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// Single pawn push
    Pawn { piece: Piece, destination: Square },
    /// Diagonal pawn capture
    PawnAttack {
        piece: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// En passant; `attacked` stands beside the pawn, not on `destination`
    PawnEnPassantAttack {
        piece: Piece,
        destination: Square,
        attacked: Piece,
    },
    /// Double pawn push from the starting row
    PawnJump { piece: Piece, destination: Square },
    /// Pawn reaching the last row; always becomes a queen
    PawnPromotion(Box<Move>),
    KingSideCastle(Castle),
    QueenSideCastle(Castle),
    /// Sentinel for "no such move"; never legal, never executable
    Null,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn major(piece: Piece, destination: Square) -> Self {
        Move::Major { piece, destination }
    }

    #[inline]
    #[must_use]
    pub const fn attack(piece: Piece, destination: Square, attacked: Piece) -> Self {
        Move::Attack {
            piece,
            destination,
            attacked,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pawn(piece: Piece, destination: Square) -> Self {
        Move::Pawn { piece, destination }
    }

    #[inline]
    #[must_use]
    pub const fn pawn_attack(piece: Piece, destination: Square, attacked: Piece) -> Self {
        Move::PawnAttack {
            piece,
            destination,
            attacked,
        }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(piece: Piece, destination: Square, attacked: Piece) -> Self {
        Move::PawnEnPassantAttack {
            piece,
            destination,
            attacked,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pawn_jump(piece: Piece, destination: Square) -> Self {
        Move::PawnJump { piece, destination }
    }

    /// Wrap a pawn push or capture that lands on the promotion row
    #[must_use]
    pub fn promotion(inner: Move) -> Self {
        Move::PawnPromotion(Box::new(inner))
    }

    /// The piece being moved; `None` for the null move
    #[must_use]
    pub fn moved_piece(&self) -> Option<&Piece> {
        match self {
            Move::Major { piece, .. }
            | Move::Attack { piece, .. }
            | Move::Pawn { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnEnPassantAttack { piece, .. }
            | Move::PawnJump { piece, .. } => Some(piece),
            Move::PawnPromotion(inner) => inner.moved_piece(),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(&castle.king),
            Move::Null => None,
        }
    }

    /// Square the moved piece starts from
    #[must_use]
    pub fn current_square(&self) -> Option<Square> {
        self.moved_piece().map(Piece::square)
    }

    /// Square the moved piece lands on
    #[must_use]
    pub fn destination(&self) -> Option<Square> {
        match self {
            Move::Major { destination, .. }
            | Move::Attack { destination, .. }
            | Move::Pawn { destination, .. }
            | Move::PawnAttack { destination, .. }
            | Move::PawnEnPassantAttack { destination, .. }
            | Move::PawnJump { destination, .. } => Some(*destination),
            Move::PawnPromotion(inner) => inner.destination(),
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => {
                Some(castle.king_destination)
            }
            Move::Null => None,
        }
    }

    /// Returns true if the move captures a piece
    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.attacked_piece().is_some()
    }

    /// The captured piece, if any
    #[must_use]
    pub fn attacked_piece(&self) -> Option<&Piece> {
        match self {
            Move::Attack { attacked, .. }
            | Move::PawnAttack { attacked, .. }
            | Move::PawnEnPassantAttack { attacked, .. } => Some(attacked),
            Move::PawnPromotion(inner) => inner.attacked_piece(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_castling_move(&self) -> bool {
        matches!(self, Move::KingSideCastle(_) | Move::QueenSideCastle(_))
    }

    #[inline]
    #[must_use]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion(_))
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Castle details for castle variants
    #[must_use]
    pub fn castle(&self) -> Option<&Castle> {
        match self {
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => Some(castle),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Major { piece, destination } => write!(f, "{piece}{destination}"),
            Move::Attack {
                piece, destination, ..
            } => write!(f, "{piece}x{destination}"),
            Move::Pawn { destination, .. } | Move::PawnJump { destination, .. } => {
                write!(f, "{destination}")
            }
            Move::PawnAttack {
                piece, destination, ..
            }
            | Move::PawnEnPassantAttack {
                piece, destination, ..
            } => write!(f, "{}x{destination}", piece.square().file_char()),
            Move::PawnPromotion(inner) => write!(f, "{inner}Q"),
            Move::KingSideCastle(_) => write!(f, "O-O"),
            Move::QueenSideCastle(_) => write!(f, "O-O-O"),
            Move::Null => write!(f, "--"),
        }
    }
}

/// Looks up legal moves by their start and destination squares.
pub struct MoveFactory;

impl MoveFactory {
    /// Find the move from `from` to `to` among every legal move on the board
    /// (either side), or [`Move::Null`] when nothing matches.
    #[must_use]
    pub fn create_move(board: &Board, from: Square, to: Square) -> Move {
        Self::find_move(board, from, to).unwrap_or(Move::Null)
    }

    /// Like [`MoveFactory::create_move`] but without the sentinel
    #[must_use]
    pub fn find_move(board: &Board, from: Square, to: Square) -> Option<Move> {
        board
            .all_legal_moves()
            .find(|mv| mv.current_square() == Some(from) && mv.destination() == Some(to))
            .cloned()
    }
}
