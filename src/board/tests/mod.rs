//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation and edge wrapping
//! - `castling.rs` - Castle availability and execution
//! - `en_passant.rs` - En passant availability window
//! - `execution.rs` - Move execution and notation
//! - `player.rs` - Move legality, check, checkmate and stalemate
//! - `proptest.rs` - Property-based tests over random playouts

mod player;

use crate::board::{
    Alliance, Board, BoardBuilder, MoveFactory, MoveStatus, Piece, PieceKind, Square,
};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Builder holding just the two kings on their home squares
pub(super) fn kings_only() -> BoardBuilder {
    BoardBuilder::new()
        .piece(Piece::new(PieceKind::King, sq("e1"), Alliance::White))
        .piece(Piece::new(PieceKind::King, sq("e8"), Alliance::Black))
}

pub(super) fn place(builder: BoardBuilder, kind: PieceKind, at: &str, alliance: Alliance) -> BoardBuilder {
    builder.piece(Piece::new(kind, sq(at), alliance))
}

/// Play `from`-`to` for the side to move; panics unless the move goes through.
pub(super) fn play(board: &Board, from: &str, to: &str) -> Board {
    let mv = MoveFactory::create_move(board, sq(from), sq(to));
    let transition = board.current_player().make_move(&mv);
    assert_eq!(
        transition.status(),
        MoveStatus::Done,
        "{from}-{to} should be playable"
    );
    transition.into_board()
}

/// Play a sequence of moves from the standard position.
pub(super) fn play_line(moves: &[(&str, &str)]) -> Board {
    moves
        .iter()
        .fold(Board::create_standard_board(), |board, (from, to)| {
            play(&board, from, to)
        })
}
