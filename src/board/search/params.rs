#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Depth settings for [`Minimax`](super::Minimax).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Plies searched from the root
    pub depth: u32,
    /// At or below this many pieces on the board the search goes deeper
    pub endgame_piece_threshold: usize,
    /// Extra plies once the endgame threshold is reached
    pub endgame_depth_bonus: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 4,
            endgame_piece_threshold: 10,
            endgame_depth_bonus: 4,
        }
    }
}

impl SearchParams {
    /// Default parameters with a different base depth
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..Self::default()
        }
    }

    /// Depth to search `board` to, counting the endgame bonus.
    #[must_use]
    pub fn effective_depth(&self, board: &Board) -> u32 {
        if board.total_piece_count() <= self.endgame_piece_threshold {
            self.depth + self.endgame_depth_bonus
        } else {
            self.depth
        }
    }
}
