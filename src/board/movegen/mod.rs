//! Pseudo-legal move generation.
//!
//! Generators only look at piece geometry and occupancy. Whether a move
//! leaves the mover's own king attacked is decided later, when the move is
//! made (see [`Player::make_move`](super::Player::make_move)). Castling lives
//! with the player because it depends on the opponent's moves.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::masks::{EIGHTH_COLUMN, FIRST_COLUMN};
use super::{Board, Move, Piece, PieceKind, Square};

pub(crate) use pawns::pawn_diagonals;
use sliders::{BISHOP_VECTORS, ROOK_VECTORS};

impl Piece {
    /// Every pseudo-legal move of this piece on `board`.
    #[must_use]
    pub fn calculate_legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind() {
            PieceKind::Pawn => board.generate_pawn_moves(self),
            PieceKind::Knight => board.generate_knight_moves(self),
            PieceKind::Bishop => board.generate_slider_moves(self, &BISHOP_VECTORS),
            PieceKind::Rook => board.generate_slider_moves(self, &ROOK_VECTORS),
            PieceKind::Queen => {
                let mut moves = board.generate_slider_moves(self, &BISHOP_VECTORS);
                moves.extend(board.generate_slider_moves(self, &ROOK_VECTORS));
                moves
            }
            PieceKind::King => board.generate_king_moves(self),
        }
    }
}

/// Pseudo-legal moves of `pieces`, in piece order.
pub(crate) fn pseudo_legal_moves(board: &Board, pieces: &[Piece]) -> Vec<Move> {
    pieces
        .iter()
        .flat_map(|piece| piece.calculate_legal_moves(board))
        .collect()
}

impl Board {
    /// Move of `piece` onto `destination` decided by occupancy alone:
    /// empty gives a quiet move, an enemy gives a capture, a friend gives nothing.
    pub(crate) fn occupancy_move(&self, piece: &Piece, destination: Square) -> Option<Move> {
        match self.piece_at(destination) {
            None => Some(Move::major(*piece, destination)),
            Some(other) if other.alliance() != piece.alliance() => {
                Some(Move::attack(*piece, destination, *other))
            }
            Some(_) => None,
        }
    }
}

/// One-step offsets that would wrap from the a-file or h-file.
///
/// Shared by kings and sliders; both use the same eight directions.
#[inline]
pub(crate) fn is_edge_wrap(square: Square, offset: i8) -> bool {
    (FIRST_COLUMN.contains(square) && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_COLUMN.contains(square) && matches!(offset, -7 | 1 | 9))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_wrap() {
        let a4: Square = "a4".parse().unwrap();
        let h4: Square = "h4".parse().unwrap();
        let d4: Square = "d4".parse().unwrap();
        assert!(is_edge_wrap(a4, -1));
        assert!(is_edge_wrap(a4, 7));
        assert!(!is_edge_wrap(a4, 1));
        assert!(is_edge_wrap(h4, 1));
        assert!(is_edge_wrap(h4, -7));
        assert!(!is_edge_wrap(h4, -9));
        for offset in [-9, -8, -7, -1, 1, 7, 8, 9] {
            assert!(!is_edge_wrap(d4, offset));
        }
    }
}
