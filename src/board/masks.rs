//! Column and row membership masks.
//!
//! Index arithmetic on a row-major board silently wraps from the h-file to the
//! a-file of the next row. Move generators consult these masks to throw out
//! offsets that would wrap.

use super::types::Bitboard;

pub(crate) const FIRST_COLUMN: Bitboard = Bitboard::COLUMN_A;
pub(crate) const SECOND_COLUMN: Bitboard = Bitboard::COLUMN_B;
pub(crate) const SEVENTH_COLUMN: Bitboard = Bitboard::COLUMN_G;
pub(crate) const EIGHTH_COLUMN: Bitboard = Bitboard::COLUMN_H;

pub(crate) const EIGHTH_RANK: Bitboard = Bitboard::RANK_8;
pub(crate) const SEVENTH_RANK: Bitboard = Bitboard::RANK_7;
pub(crate) const SECOND_RANK: Bitboard = Bitboard::RANK_2;
pub(crate) const FIRST_RANK: Bitboard = Bitboard::RANK_1;
