//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of tiles on the board
pub const NUM_TILES: usize = 64;
/// Number of tiles in a row (and in a column)
pub const NUM_TILES_PER_ROW: usize = 8;

/// A tile coordinate in `[0, 64)`, row-major.
///
/// Row 0 is rank 8 and column 0 is file a, so `a8` is 0 and `h1` is 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from a tile index, returning `None` when off the board
    #[inline]
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_TILES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from a (row, column) pair; row 0 is rank 8
    #[inline]
    #[must_use]
    pub const fn from_coords(row: usize, column: usize) -> Option<Self> {
        if row < NUM_TILES_PER_ROW && column < NUM_TILES_PER_ROW {
            Some(Square((row * NUM_TILES_PER_ROW + column) as u8))
        } else {
            None
        }
    }

    /// Tile index in `[0, 64)`
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row (0 = rank 8, 7 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / NUM_TILES_PER_ROW
    }

    /// Column (0 = file a, 7 = file h)
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.0 as usize % NUM_TILES_PER_ROW
    }

    /// Raw index arithmetic, validated against the board range only.
    ///
    /// Edge wrap-around (h-file to a-file) is not detected here; callers
    /// check the column masks for the offset they apply.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let target = self.0 as i16 + delta as i16;
        if target >= 0 && target < NUM_TILES as i16 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// File letter of this square (`'a'..='h'`)
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.column() as u8) as char
    }

    /// Rank digit of this square (`'1'..='8'`)
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row() as u8) as char
    }

    /// Iterate over all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_TILES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::OutOfRange { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let column = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => (b'8' - b) as usize,
            _ => return Err(invalid()),
        };

        Square::from_coords(row, column).ok_or_else(invalid)
    }
}
