//! Core chess types.
//!
//! This module contains the value types used throughout the engine:
//! - `Alliance` - the two sides
//! - `Square` - row-major tile coordinate (a8 = 0)
//! - `Bitboard` - 64-bit square sets used for edge masks
//! - `PieceKind` and `Piece` - immutable piece values
//! - `Move` - closed set of move variants, plus `MoveFactory` lookup

mod alliance;
mod bitboard;
mod moves;
mod piece;
mod square;

pub use alliance::Alliance;
pub use bitboard::Bitboard;
pub use moves::{Castle, Move, MoveFactory};
pub use piece::{Piece, PieceKind};
pub use square::{Square, NUM_TILES, NUM_TILES_PER_ROW};
