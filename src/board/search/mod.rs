//! Move selection.
//!
//! Two strategies share the [`MoveStrategy`] contract:
//! - [`Minimax`]: fixed-depth minimax with alpha-beta pruning over the
//!   [`BoardEvaluator`](super::BoardEvaluator) score
//! - [`RandomStrategy`]: uniform choice among moves that go through

mod minimax;
mod params;
mod random;

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use super::{Board, Move};

pub use minimax::Minimax;
pub use params::SearchParams;
pub use random::RandomStrategy;

/// A way of picking a move for the side to move.
pub trait MoveStrategy: Send {
    /// Pick a move, checking `stop` between root candidates.
    ///
    /// Returns `None` only when the side to move has no move that goes
    /// through (checkmate or stalemate).
    fn select_move_with_stop(&mut self, board: &Board, stop: &AtomicBool) -> Option<Move>;

    /// Pick a move, running to completion.
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        self.select_move_with_stop(board, &AtomicBool::new(false))
    }

    /// Short display name
    fn name(&self) -> &str;
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root children included
    pub nodes: u64,
    /// Static evaluations
    pub evaluations: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Effective depth the search ran to
    pub depth: u32,
    pub elapsed: Duration,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth {} nodes {} evals {} cutoffs {} time {}ms",
            self.depth,
            self.nodes,
            self.evaluations,
            self.cutoffs,
            self.elapsed.as_millis()
        )
    }
}
