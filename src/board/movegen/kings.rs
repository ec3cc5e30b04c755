use super::super::{Board, Move, Piece};
use super::is_edge_wrap;

const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

impl Board {
    /// One-step king moves. Castles are added by the player.
    pub(crate) fn generate_king_moves(&self, king: &Piece) -> Vec<Move> {
        let from = king.square();
        KING_OFFSETS
            .iter()
            .filter(|&&offset| !is_edge_wrap(from, offset))
            .filter_map(|&offset| from.offset(offset))
            .filter_map(|to| self.occupancy_move(king, to))
            .collect()
    }
}
