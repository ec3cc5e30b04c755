//! Chess board representation and game logic.
//!
//! Boards are immutable snapshots. Moves are generated per piece, checked for
//! legality by the [`Player`] that makes them, and executed into a fresh
//! board. Supports full chess rules including castling, en passant and
//! (queen) promotion.
//!
//! # Example
//! ```
//! use minimax_chess::board::Board;
//!
//! let board = Board::create_standard_board();
//! let moves = board.current_player().legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
mod execute;
mod masks;
mod movegen;
mod player;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, SquareError};
pub use player::{MoveStatus, MoveTransition, Player};
pub use state::{Board, Tile};
pub use types::{
    Alliance, Bitboard, Castle, Move, MoveFactory, Piece, PieceKind, Square, NUM_TILES,
    NUM_TILES_PER_ROW,
};

// Public API - evaluation and search
pub use eval::{BoardEvaluator, StandardEvaluator};
pub use search::{Minimax, MoveStrategy, RandomStrategy, SearchParams, SearchStats};
