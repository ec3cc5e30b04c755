//! Applying a move to a board.
//!
//! Execution copies every surviving piece into a fresh [`BoardBuilder`],
//! places the moved piece on its destination and flips the side to move.
//! The source board is never touched.

use super::builder::BoardBuilder;
use super::error::BoardError;
use super::state::Board;
use super::types::{Castle, Move, Piece, PieceKind, Square};

impl Move {
    /// Execute this move against the board it was generated for.
    ///
    /// Legality is not checked here; see [`Player::make_move`](crate::board::Player::make_move).
    ///
    /// # Errors
    /// [`BoardError::NullMoveExecution`] for [`Move::Null`]. Construction
    /// errors from the resulting layout are passed through.
    pub fn execute(&self, board: &Board) -> Result<Board, BoardError> {
        self.stage(board)?.build()
    }

    fn stage(&self, board: &Board) -> Result<BoardBuilder, BoardError> {
        let builder = match self {
            Move::Null => return Err(BoardError::NullMoveExecution),
            Move::PawnPromotion(inner) => {
                let pawn = inner.moved_piece().ok_or(BoardError::NullMoveExecution)?;
                let queen = pawn.move_to(inner).promotion_piece();
                inner.stage(board)?.piece(queen)
            }
            Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => {
                self.stage_castle(board, castle)
            }
            Move::PawnJump { piece, .. } => {
                let moved = piece.move_to(self);
                self.stage_standard(board, piece, None).en_passant_pawn(moved)
            }
            Move::Major { piece, .. } | Move::Pawn { piece, .. } => {
                self.stage_standard(board, piece, None)
            }
            Move::Attack {
                piece, attacked, ..
            }
            | Move::PawnAttack {
                piece, attacked, ..
            }
            | Move::PawnEnPassantAttack {
                piece, attacked, ..
            } => self.stage_standard(board, piece, Some(attacked.square())),
        };

        Ok(builder
            .move_maker(board.next_move_maker().opponent())
            .transition_move(self.clone()))
    }

    fn stage_standard(&self, board: &Board, moved: &Piece, captured: Option<Square>) -> BoardBuilder {
        copy_except(board, &[Some(moved.square()), captured]).piece(moved.move_to(self))
    }

    fn stage_castle(&self, board: &Board, castle: &Castle) -> BoardBuilder {
        let rook = Piece::with_first_move(
            PieceKind::Rook,
            castle.rook_destination,
            castle.rook.alliance(),
            false,
        );
        copy_except(board, &[Some(castle.king.square()), Some(castle.rook_start())])
            .piece(castle.king.move_to(self))
            .piece(rook)
    }
}

fn copy_except(board: &Board, skipped: &[Option<Square>]) -> BoardBuilder {
    board
        .white_pieces()
        .iter()
        .chain(board.black_pieces())
        .filter(|piece| !skipped.contains(&Some(piece.square())))
        .fold(BoardBuilder::new(), |builder, piece| builder.piece(*piece))
}
