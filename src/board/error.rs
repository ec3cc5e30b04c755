//! Error types for board construction and square parsing.

use thiserror::Error;

use super::types::Alliance;

/// Errors raised while building or transitioning a board.
///
/// Illegal move attempts are not errors; they are reported through
/// [`MoveStatus`](crate::board::MoveStatus).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A side has no king on the board
    #[error("{0} has no king on the board")]
    MissingKing(Alliance),
    /// A side has more than one king on the board
    #[error("{0} has more than one king on the board")]
    MultipleKings(Alliance),
    /// The null move sentinel was executed
    #[error("cannot execute the null move")]
    NullMoveExecution,
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Tile index outside `[0, 64)`
    #[error("square index {index} out of range (must be 0-63)")]
    OutOfRange { index: usize },
    /// Invalid algebraic notation
    #[error("invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}
