//! Piece kinds and piece values.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::alliance::Alliance;
use super::moves::Move;
use super::square::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in centipawns.
    ///
    /// Pawn=100, Knight=300, Bishop=300, Rook=500, Queen=900, King=10000.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight | PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    /// Upper-case letter used in move notation
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a piece kind from its letter (either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A piece standing on a square.
///
/// Pieces are values: moving one produces a new `Piece` at the destination
/// (see [`Piece::move_to`]). Two pieces compare equal when kind, square,
/// alliance and first-move flag agree; the king's `castled` flag is not part
/// of identity.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    square: Square,
    alliance: Alliance,
    first_move: bool,
    castled: bool,
}

impl Piece {
    /// A piece that has not moved yet
    #[must_use]
    pub const fn new(kind: PieceKind, square: Square, alliance: Alliance) -> Self {
        Piece {
            kind,
            square,
            alliance,
            first_move: true,
            castled: false,
        }
    }

    /// A piece with an explicit first-move flag
    #[must_use]
    pub const fn with_first_move(
        kind: PieceKind,
        square: Square,
        alliance: Alliance,
        first_move: bool,
    ) -> Self {
        Piece {
            kind,
            square,
            alliance,
            first_move,
            castled: false,
        }
    }

    /// A king that has already castled
    #[must_use]
    pub const fn castled_king(square: Square, alliance: Alliance) -> Self {
        Piece {
            kind: PieceKind::King,
            square,
            alliance,
            first_move: false,
            castled: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// True until the piece makes its first move
    #[inline]
    #[must_use]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Only ever true for a king that castled
    #[inline]
    #[must_use]
    pub const fn is_castled(&self) -> bool {
        self.castled
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.kind.value()
    }

    #[inline]
    #[must_use]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// The piece after making `mv`: same kind and side, on the move's
    /// destination, first move spent.
    #[must_use]
    pub fn move_to(&self, mv: &Move) -> Piece {
        let destination = mv.destination().unwrap_or(self.square);
        let castled = self.kind == PieceKind::King && (mv.is_castling_move() || self.castled);
        Piece {
            kind: self.kind,
            square: destination,
            alliance: self.alliance,
            first_move: false,
            castled,
        }
    }

    /// The queen this pawn turns into, on the square it stands on
    #[must_use]
    pub const fn promotion_piece(&self) -> Piece {
        Piece::with_first_move(PieceKind::Queen, self.square, self.alliance, false)
    }

    /// Board character: upper case for White, lower case for Black
    #[must_use]
    pub fn board_char(&self) -> char {
        let c = self.kind.letter();
        if self.alliance.is_white() {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.square == other.square
            && self.alliance == other.alliance
            && self.first_move == other.first_move
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.square.hash(state);
        self.alliance.hash(state);
        self.first_move.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_values() {
        assert_eq!(PieceKind::Pawn.value(), 100);
        assert_eq!(PieceKind::Knight.value(), PieceKind::Bishop.value());
        assert_eq!(PieceKind::Queen.value(), 900);
        assert_eq!(PieceKind::King.value(), 10000);
    }

    #[test]
    fn test_identity_ignores_castled_flag() {
        let a = Piece::with_first_move(PieceKind::King, sq("g1"), Alliance::White, false);
        let b = Piece::castled_king(sq("g1"), Alliance::White);
        assert_eq!(a, b);
        assert!(b.is_castled());
    }

    #[test]
    fn test_identity_includes_first_move() {
        let fresh = Piece::new(PieceKind::Rook, sq("h1"), Alliance::White);
        let moved = Piece::with_first_move(PieceKind::Rook, sq("h1"), Alliance::White, false);
        assert_ne!(fresh, moved);
    }

    #[test]
    fn test_promotion_piece() {
        let pawn = Piece::new(PieceKind::Pawn, sq("c1"), Alliance::Black);
        let queen = pawn.promotion_piece();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.square(), sq("c1"));
        assert_eq!(queen.alliance(), Alliance::Black);
        assert!(!queen.is_first_move());
    }

    #[test]
    fn test_board_char_case() {
        assert_eq!(Piece::new(PieceKind::Knight, sq("b1"), Alliance::White).board_char(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, sq("b8"), Alliance::Black).board_char(), 'n');
    }

    #[test]
    fn test_from_char() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.letter()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('x'), None);
    }
}
