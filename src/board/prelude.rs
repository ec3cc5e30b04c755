//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use minimax_chess::board::prelude::*;
//!
//! let board = Board::create_standard_board();
//! assert_eq!(board.current_player().alliance(), Alliance::White);
//! ```

pub use super::{
    Alliance, Board, BoardBuilder, BoardError, Minimax, Move, MoveFactory, MoveStatus,
    MoveStrategy, Piece, PieceKind, RandomStrategy, Square,
};
