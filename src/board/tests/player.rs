//! Player gate tests: legality, check, checkmate and stalemate.

use std::collections::HashSet;

use super::{kings_only, place, play_line, sq};
use crate::board::{Alliance, Board, BoardBuilder, Move, MoveFactory, MoveStatus, Piece, PieceKind};

#[test]
fn test_move_outside_legal_set_is_illegal() {
    let board = Board::create_standard_board();
    let pawn = *board.piece_at(sq("e2")).unwrap();
    let bogus = Move::pawn(pawn, sq("e5"));
    let transition = board.current_player().make_move(&bogus);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
    assert!(std::ptr::eq(transition.transition_board(), &board));
}

#[test]
fn test_null_move_is_illegal() {
    let board = Board::create_standard_board();
    let transition = board.current_player().make_move(&Move::Null);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
}

#[test]
fn test_opponent_move_is_illegal_for_current_player() {
    let board = Board::create_standard_board();
    let black_move = MoveFactory::create_move(&board, sq("e7"), sq("e5"));
    assert!(!black_move.is_null());
    let transition = board.current_player().make_move(&black_move);
    assert_eq!(transition.status(), MoveStatus::IllegalMove);
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let builder = place(kings_only(), PieceKind::Bishop, "e2", Alliance::White);
    let board = place(builder, PieceKind::Rook, "e7", Alliance::Black)
        .build()
        .unwrap();
    let mv = MoveFactory::create_move(&board, sq("e2"), sq("d3"));
    let transition = board.current_player().make_move(&mv);
    assert_eq!(transition.status(), MoveStatus::LeavesPlayerInCheck);
    assert!(std::ptr::eq(transition.transition_board(), &board));
}

#[test]
fn test_fools_mate_is_checkmate() {
    let board = play_line(&[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);
    let white = board.current_player();
    assert_eq!(white.alliance(), Alliance::White);
    assert!(white.is_in_check());
    assert!(white.is_in_checkmate());
    assert!(!white.is_in_stalemate());
    assert!(!white.has_escape_moves());
    assert!(!white.opponent().is_in_check());
}

#[test]
fn test_stalemate() {
    let board = BoardBuilder::new()
        .piece(Piece::new(PieceKind::King, sq("a8"), Alliance::Black))
        .piece(Piece::new(PieceKind::Queen, sq("b6"), Alliance::White))
        .piece(Piece::new(PieceKind::King, sq("c6"), Alliance::White))
        .move_maker(Alliance::Black)
        .build()
        .unwrap();
    let black = board.current_player();
    assert!(!black.is_in_check());
    assert!(black.is_in_stalemate());
    assert!(!black.is_in_checkmate());
    assert!(!black.legal_moves().is_empty());
}

#[test]
fn test_check_can_be_escaped() {
    let board = place(kings_only(), PieceKind::Rook, "e5", Alliance::Black)
        .build()
        .unwrap();
    let white = board.current_player();
    assert!(white.is_in_check());
    assert!(white.has_escape_moves());
    assert!(!white.is_in_checkmate());
}

#[test]
fn test_legal_moves_are_distinct_and_playable() {
    let board = play_line(&[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")]);
    let player = board.current_player();
    let distinct: HashSet<&Move> = player.legal_moves().iter().collect();
    assert_eq!(distinct.len(), player.legal_moves().len());
    for mv in player.legal_moves() {
        assert_ne!(player.make_move(mv).status(), MoveStatus::IllegalMove);
    }
}

#[test]
fn test_player_accessors() {
    let board = Board::create_standard_board();
    let white = board.white_player();
    assert_eq!(white.to_string(), "White");
    assert_eq!(white.opponent().to_string(), "Black");
    assert_eq!(white.king().square(), sq("e1"));
    assert_eq!(white.active_pieces().len(), 16);
    assert!(std::ptr::eq(white.board(), &board));
}
