//! Game driver on top of the board layer.
//!
//! Holds the pieces a front end needs: who plays which side, the move log,
//! game-over detection and running the computer's search off the caller's
//! thread.

mod controller;
mod error;
mod game;
mod setup;

pub use controller::{SearchJob, SearchOutcome};
pub use error::EngineError;
pub use game::{Game, GameStatus, MoveLog, MoveRecord};
pub use setup::{Difficulty, GameSetup, PlayerType};
