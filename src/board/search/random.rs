use std::sync::atomic::AtomicBool;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::MoveStrategy;
use crate::board::{Board, Move};

/// Picks uniformly among the legal moves, drawing again whenever the drawn
/// move would leave the king in check.
pub struct RandomStrategy {
    rng: StdRng,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomStrategy {
    #[must_use]
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of choices
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveStrategy for RandomStrategy {
    fn select_move_with_stop(&mut self, board: &Board, _stop: &AtomicBool) -> Option<Move> {
        let player = board.current_player();
        if !player.has_escape_moves() {
            return None;
        }
        loop {
            let mv = player.legal_moves().choose(&mut self.rng)?;
            if player.make_move(mv).status().is_done() {
                return Some(mv.clone());
            }
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
