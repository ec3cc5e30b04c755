//! Castle generation.
//!
//! A castle is offered only when the king and the corner rook are both
//! unmoved on their home squares, the squares between them are empty, the
//! king is not in check, and no square the king crosses or lands on is
//! covered by the opponent.

use crate::board::movegen::pawn_diagonals;
use crate::board::{Alliance, Bitboard, Board, Castle, Move, Piece, PieceKind, Square};

const KING_HOME_COLUMN: usize = 4;

/// Column layout of one castle.
struct CastleLayout {
    rook_column: usize,
    king_destination_column: usize,
    rook_destination_column: usize,
    /// Squares that must be empty
    between: &'static [usize],
    /// Squares the king crosses or lands on; must not be attacked
    path: &'static [usize],
}

const KING_SIDE: CastleLayout = CastleLayout {
    rook_column: 7,
    king_destination_column: 6,
    rook_destination_column: 5,
    between: &[5, 6],
    path: &[5, 6],
};

const QUEEN_SIDE: CastleLayout = CastleLayout {
    rook_column: 0,
    king_destination_column: 2,
    rook_destination_column: 3,
    between: &[1, 2, 3],
    path: &[3, 2],
};

/// Returns true if any of `moves` lands on `square`.
pub(crate) fn attacks_square(moves: &[Move], square: Square) -> bool {
    moves.iter().any(|mv| mv.destination() == Some(square))
}

/// Castles available to the side owning `king`, given the opponent's
/// pseudo-legal moves on the same board.
pub(crate) fn castle_moves(
    board: &Board,
    king: &Piece,
    in_check: bool,
    opponent_moves: &[Move],
) -> Vec<Move> {
    let alliance = king.alliance();
    let row = alliance.back_row() as usize;
    let at_home = Square::from_coords(row, KING_HOME_COLUMN) == Some(king.square());
    if in_check || !king.is_first_move() || !at_home {
        return Vec::new();
    }

    let covered = covered_squares(board, opponent_moves, alliance.opponent());
    let mut moves = Vec::new();
    for (layout, king_side) in [(&KING_SIDE, true), (&QUEEN_SIDE, false)] {
        if let Some(castle) = castle_for(board, king, row, layout, covered) {
            moves.push(if king_side {
                Move::KingSideCastle(castle)
            } else {
                Move::QueenSideCastle(castle)
            });
        }
    }
    moves
}

fn castle_for(
    board: &Board,
    king: &Piece,
    row: usize,
    layout: &CastleLayout,
    covered: Bitboard,
) -> Option<Castle> {
    let square = |column| Square::from_coords(row, column);

    for &column in layout.between {
        if board.piece_at(square(column)?).is_some() {
            return None;
        }
    }
    let rook = *board.piece_at(square(layout.rook_column)?)?;
    if rook.kind() != PieceKind::Rook
        || rook.alliance() != king.alliance()
        || !rook.is_first_move()
    {
        return None;
    }
    for &column in layout.path {
        if covered.contains(square(column)?) {
            return None;
        }
    }

    Some(Castle {
        king: *king,
        king_destination: square(layout.king_destination_column)?,
        rook,
        rook_destination: square(layout.rook_destination_column)?,
    })
}

/// Squares the opponent could move to or capture on. Pawn pushes do not
/// attack; pawn diagonals do, whether or not anything stands there.
fn covered_squares(board: &Board, opponent_moves: &[Move], opponent: Alliance) -> Bitboard {
    let by_moves = opponent_moves
        .iter()
        .filter(|mv| !is_pawn_advance(mv))
        .filter_map(Move::destination);
    let by_pawns = board
        .active_pieces(opponent)
        .iter()
        .filter(|piece| piece.kind() == PieceKind::Pawn)
        .flat_map(pawn_diagonals);
    by_moves.chain(by_pawns).collect()
}

fn is_pawn_advance(mv: &Move) -> bool {
    match mv {
        Move::Pawn { .. } | Move::PawnJump { .. } => true,
        Move::PawnPromotion(inner) => is_pawn_advance(inner),
        _ => false,
    }
}
