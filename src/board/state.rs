//! Immutable board snapshot.
//!
//! A `Board` owns its tiles, the active pieces of both sides and the derived
//! per-side state (king, legal moves, check flag). Everything is computed
//! once at construction; positions are never mutated afterwards.

use std::fmt;

use log::trace;
use once_cell::sync::{Lazy, OnceCell};

use super::builder::BoardBuilder;
use super::error::BoardError;
use super::movegen;
use super::player::{castling, Player};
use super::types::{Alliance, Move, Piece, PieceKind, Square, NUM_TILES, NUM_TILES_PER_ROW};

static STANDARD_BOARD: Lazy<Board> = Lazy::new(|| {
    BoardBuilder::starting_position()
        .build()
        .expect("standard layout has one king per side")
});

/// Read-only view of one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    square: Square,
    piece: Option<Piece>,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.piece {
            Some(piece) => write!(f, "{}", piece.board_char()),
            None => write!(f, "-"),
        }
    }
}

/// Derived state of one side, computed when the board is built.
#[derive(Clone, Debug)]
pub(crate) struct PlayerState {
    pub(crate) king: Piece,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
    pub(crate) has_escape_moves: OnceCell<bool>,
}

impl PlayerState {
    fn new(king: Piece, legal_moves: Vec<Move>, in_check: bool) -> Self {
        PlayerState {
            king,
            legal_moves,
            in_check,
            has_escape_moves: OnceCell::new(),
        }
    }
}

/// An immutable chess position.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: [Option<Piece>; NUM_TILES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    en_passant_pawn: Option<Piece>,
    next_move_maker: Alliance,
    transition_move: Move,
    players: [PlayerState; 2],
}

impl Board {
    /// The standard initial position, White to move.
    #[must_use]
    pub fn create_standard_board() -> Board {
        STANDARD_BOARD.clone()
    }

    /// Assemble a board from a square layout and derive both players.
    pub(crate) fn assemble(
        tiles: [Option<Piece>; NUM_TILES],
        next_move_maker: Alliance,
        en_passant_pawn: Option<Piece>,
        transition_move: Move,
    ) -> Result<Board, BoardError> {
        let white_pieces = active_pieces(&tiles, Alliance::White);
        let black_pieces = active_pieces(&tiles, Alliance::Black);
        let white_king = find_king(&white_pieces, Alliance::White)?;
        let black_king = find_king(&black_pieces, Alliance::Black)?;

        let mut board = Board {
            tiles,
            white_pieces,
            black_pieces,
            en_passant_pawn,
            next_move_maker,
            transition_move,
            players: [
                PlayerState::new(white_king, Vec::new(), false),
                PlayerState::new(black_king, Vec::new(), false),
            ],
        };

        let white_moves = movegen::pseudo_legal_moves(&board, &board.white_pieces);
        let black_moves = movegen::pseudo_legal_moves(&board, &board.black_pieces);
        let white_in_check = castling::attacks_square(&black_moves, white_king.square());
        let black_in_check = castling::attacks_square(&white_moves, black_king.square());
        let white_castles = castling::castle_moves(&board, &white_king, white_in_check, &black_moves);
        let black_castles = castling::castle_moves(&board, &black_king, black_in_check, &white_moves);

        board.players = [
            PlayerState::new(white_king, concat(white_moves, white_castles), white_in_check),
            PlayerState::new(black_king, concat(black_moves, black_castles), black_in_check),
        ];
        trace!(
            "assembled board: {} to move, {} white moves, {} black moves",
            board.next_move_maker,
            board.players[0].legal_moves.len(),
            board.players[1].legal_moves.len()
        );
        Ok(board)
    }

    /// Occupancy of `square`
    #[inline]
    #[must_use]
    pub fn tile(&self, square: Square) -> Tile {
        Tile {
            square,
            piece: self.tiles[square.index()],
        }
    }

    /// Piece on `square`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.tiles[square.index()].as_ref()
    }

    #[inline]
    #[must_use]
    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    #[inline]
    #[must_use]
    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    /// Active pieces of one side in square order
    #[inline]
    #[must_use]
    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        alliance.choose(&self.white_pieces, &self.black_pieces)
    }

    /// Number of pieces on the board, both sides
    #[inline]
    #[must_use]
    pub fn total_piece_count(&self) -> usize {
        self.white_pieces.len() + self.black_pieces.len()
    }

    /// The pawn that made a double push on the previous move
    #[inline]
    #[must_use]
    pub const fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    /// The move that produced this position ([`Move::Null`] for set-up boards)
    #[inline]
    #[must_use]
    pub const fn transition_move(&self) -> &Move {
        &self.transition_move
    }

    #[inline]
    #[must_use]
    pub const fn next_move_maker(&self) -> Alliance {
        self.next_move_maker
    }

    #[inline]
    #[must_use]
    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }

    /// The side to move
    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.next_move_maker)
    }

    #[inline]
    #[must_use]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    #[inline]
    #[must_use]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    /// Legal moves of both sides, White's first
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.players[0]
            .legal_moves
            .iter()
            .chain(self.players[1].legal_moves.iter())
    }

    /// Text of `mv` with `+` appended if it gives check or `#` if it mates.
    #[must_use]
    pub fn move_notation(&self, mv: &Move) -> String {
        match mv.execute(self) {
            Ok(next) => next.annotate(mv),
            Err(_) => mv.to_string(),
        }
    }

    /// Text of `mv`, the move that produced this board, with its check suffix.
    #[must_use]
    pub fn annotate(&self, mv: &Move) -> String {
        let player = self.current_player();
        if player.is_in_checkmate() {
            format!("{mv}#")
        } else if player.is_in_check() {
            format!("{mv}+")
        } else {
            mv.to_string()
        }
    }

    #[inline]
    pub(crate) fn player_state(&self, alliance: Alliance) -> &PlayerState {
        &self.players[alliance.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in Square::all() {
            write!(f, "{:>3}", self.tile(square).to_string())?;
            if (square.index() + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn active_pieces(tiles: &[Option<Piece>; NUM_TILES], alliance: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .flatten()
        .filter(|piece| piece.alliance() == alliance)
        .copied()
        .collect()
}

fn find_king(pieces: &[Piece], alliance: Alliance) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|p| p.kind() == PieceKind::King);
    let king = kings.next().ok_or(BoardError::MissingKing(alliance))?;
    if kings.next().is_some() {
        return Err(BoardError::MultipleKings(alliance));
    }
    Ok(*king)
}

fn concat(mut moves: Vec<Move>, extra: Vec<Move>) -> Vec<Move> {
    moves.extend(extra);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_layout() {
        let board = Board::create_standard_board();
        let expected = concat!(
            "  r  n  b  q  k  b  n  r\n",
            "  p  p  p  p  p  p  p  p\n",
            "  -  -  -  -  -  -  -  -\n",
            "  -  -  -  -  -  -  -  -\n",
            "  -  -  -  -  -  -  -  -\n",
            "  -  -  -  -  -  -  -  -\n",
            "  P  P  P  P  P  P  P  P\n",
            "  R  N  B  Q  K  B  N  R\n",
        );
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_tile_view() {
        let board = Board::create_standard_board();
        let e1 = board.tile("e1".parse().unwrap());
        assert!(e1.is_occupied());
        assert_eq!(e1.piece().map(Piece::kind), Some(PieceKind::King));
        assert!(!board.tile("e4".parse().unwrap()).is_occupied());
    }

    #[test]
    fn test_standard_board_metadata() {
        let board = Board::create_standard_board();
        assert_eq!(board.next_move_maker(), Alliance::White);
        assert!(board.en_passant_pawn().is_none());
        assert!(board.transition_move().is_null());
        assert_eq!(board.total_piece_count(), 32);
        assert_eq!(board.all_legal_moves().count(), 40);
    }
}
