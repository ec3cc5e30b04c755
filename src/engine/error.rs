//! Error types for the game layer.

use std::io;

use thiserror::Error;

/// Failures while driving a game.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to spawn search thread: {0}")]
    Spawn(#[from] io::Error),
    #[error("search thread panicked")]
    SearchAborted,
    #[error("it is not a computer player's turn")]
    NotAiTurn,
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}
