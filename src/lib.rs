pub mod board;
pub mod engine;

pub use board::{Alliance, Board, Move, MoveStrategy, Piece, PieceKind, Square};
pub use engine::{Difficulty, Game, GameSetup};
