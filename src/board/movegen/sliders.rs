use super::super::{Board, Move, Piece};
use super::is_edge_wrap;

pub(crate) const BISHOP_VECTORS: [i8; 4] = [-9, -7, 7, 9];
pub(crate) const ROOK_VECTORS: [i8; 4] = [-8, -1, 1, 8];

impl Board {
    /// Walk each vector until the board edge or the first blocker.
    pub(crate) fn generate_slider_moves(&self, piece: &Piece, vectors: &[i8]) -> Vec<Move> {
        let mut moves = Vec::new();
        for &vector in vectors {
            let mut current = piece.square();
            while !is_edge_wrap(current, vector) {
                let Some(next) = current.offset(vector) else {
                    break;
                };
                match self.piece_at(next) {
                    None => moves.push(Move::major(*piece, next)),
                    Some(other) => {
                        if other.alliance() != piece.alliance() {
                            moves.push(Move::attack(*piece, next, *other));
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }
}
