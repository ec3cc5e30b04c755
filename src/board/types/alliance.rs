//! Side identifiers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::masks::{EIGHTH_RANK, FIRST_RANK, SECOND_RANK, SEVENTH_RANK};

/// The side a piece or player belongs to. White moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Both alliances in index order (White=0, Black=1)
    pub const BOTH: [Alliance; 2] = [Alliance::White, Alliance::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Alliance::White)
    }

    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Alliance::Black)
    }

    /// Returns the other side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Pawn forward direction in square-index space.
    ///
    /// Square 0 is a8, so White pawns walk towards lower indices.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    /// Row (0 = rank 8) holding this side's king and rooks at the start
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> u8 {
        match self {
            Alliance::White => 7,
            Alliance::Black => 0,
        }
    }

    /// Returns true if `square` is on the row this side's pawns start from
    #[inline]
    #[must_use]
    pub const fn is_pawn_start_square(self, square: Square) -> bool {
        match self {
            Alliance::White => SECOND_RANK.contains(square),
            Alliance::Black => SEVENTH_RANK.contains(square),
        }
    }

    /// Returns true if a pawn of this side landing on `square` promotes
    #[inline]
    #[must_use]
    pub const fn is_pawn_promotion_square(self, square: Square) -> bool {
        match self {
            Alliance::White => EIGHTH_RANK.contains(square),
            Alliance::Black => FIRST_RANK.contains(square),
        }
    }

    /// Picks the item belonging to this side out of a (white, black) pair
    #[inline]
    pub fn choose<T>(self, white: T, black: T) -> T {
        match self {
            Alliance::White => white,
            Alliance::Black => black,
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_round_trip() {
        for alliance in Alliance::BOTH {
            assert_eq!(alliance.opponent().opponent(), alliance);
            assert_ne!(alliance.opponent(), alliance);
        }
    }

    #[test]
    fn test_promotion_squares() {
        let e8: Square = "e8".parse().unwrap();
        let e1: Square = "e1".parse().unwrap();
        assert!(Alliance::White.is_pawn_promotion_square(e8));
        assert!(!Alliance::White.is_pawn_promotion_square(e1));
        assert!(Alliance::Black.is_pawn_promotion_square(e1));
        assert!(!Alliance::Black.is_pawn_promotion_square(e8));
    }

    #[test]
    fn test_pawn_start_rows() {
        let a2: Square = "a2".parse().unwrap();
        let h7: Square = "h7".parse().unwrap();
        assert!(Alliance::White.is_pawn_start_square(a2));
        assert!(Alliance::Black.is_pawn_start_square(h7));
        assert!(!Alliance::White.is_pawn_start_square(h7));
    }

    #[test]
    fn test_direction_signs() {
        assert_eq!(Alliance::White.direction(), -1);
        assert_eq!(Alliance::Black.direction(), 1);
        assert_eq!(Alliance::White.to_string(), "White");
        assert_eq!(Alliance::Black.to_string(), "Black");
    }
}
