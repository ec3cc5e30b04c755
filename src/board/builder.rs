//! Fluent builder for constructing chess positions.
//!
//! Boards are immutable once built; the builder is the only way to assemble
//! one, both for setting up test positions and for [`Move::execute`].
//!
//! # Example
//! ```
//! use minimax_chess::board::{Alliance, BoardBuilder, Piece, PieceKind, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .piece(Piece::new(PieceKind::King, e1, Alliance::White))
//!     .piece(Piece::new(PieceKind::King, e8, Alliance::Black))
//!     .move_maker(Alliance::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.white_pieces().len(), 1);
//! ```

use super::error::BoardError;
use super::state::Board;
use super::types::{Alliance, Move, Piece, PieceKind, Square, NUM_TILES};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    config: [Option<Piece>; NUM_TILES],
    move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
    transition_move: Move,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with White to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            config: [None; NUM_TILES],
            move_maker: Alliance::White,
            en_passant_pawn: None,
            transition_move: Move::Null,
        }
    }

    /// Create a builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        const BACK_ROW: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut builder = Self::new();
        for (column, &kind) in BACK_ROW.iter().enumerate() {
            for (row, alliance, kind) in [
                (0, Alliance::Black, kind),
                (1, Alliance::Black, PieceKind::Pawn),
                (6, Alliance::White, PieceKind::Pawn),
                (7, Alliance::White, kind),
            ] {
                if let Some(square) = Square::from_coords(row, column) {
                    builder = builder.piece(Piece::new(kind, square, alliance));
                }
            }
        }
        builder
    }

    /// Place a piece on its square, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, piece: Piece) -> Self {
        self.config[piece.square().index()] = Some(piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.config[square.index()] = None;
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn move_maker(mut self, alliance: Alliance) -> Self {
        self.move_maker = alliance;
        self
    }

    /// Record the pawn that just made a double push.
    #[must_use]
    pub const fn en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Record the move that produced this position.
    #[must_use]
    pub fn transition_move(mut self, mv: Move) -> Self {
        self.transition_move = mv;
        self
    }

    /// Build the board.
    ///
    /// # Errors
    /// Returns [`BoardError::MissingKing`] or [`BoardError::MultipleKings`]
    /// unless each side has exactly one king.
    pub fn build(self) -> Result<Board, BoardError> {
        Board::assemble(
            self.config,
            self.move_maker,
            self.en_passant_pawn,
            self.transition_move,
        )
    }
}
