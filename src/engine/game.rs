//! A game in progress: current position, move log and player setup.

use std::fmt;

use log::{debug, info, warn};

use super::controller::SearchJob;
use super::error::EngineError;
use super::setup::GameSetup;
use crate::board::{Alliance, Board, Move, MoveFactory, MoveStatus, MoveStrategy, Piece, Square};

/// One played move with its notation at the time it was made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// Move text with `+` or `#` suffix
    pub notation: String,
}

/// Ordered history of the moves played.
#[derive(Clone, Debug, Default)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Remove and return the record at `index`, if there is one
    pub fn remove(&mut self, index: usize) -> Option<MoveRecord> {
        (index < self.records.len()).then(|| self.records.remove(index))
    }

    /// Pieces of `alliance` captured so far, cheapest first
    #[must_use]
    pub fn taken_pieces(&self, alliance: Alliance) -> Vec<Piece> {
        let mut taken: Vec<Piece> = self
            .records
            .iter()
            .filter_map(|record| record.mv.attacked_piece())
            .filter(|piece| piece.alliance() == alliance)
            .copied()
            .collect();
        taken.sort_by_key(Piece::value);
        taken
    }

    /// Notation paired into (White, Black) rows.
    ///
    /// A Black move with no White move before it in the same row gets an
    /// empty White cell.
    #[must_use]
    pub fn history_rows(&self) -> Vec<(Option<&str>, Option<&str>)> {
        let mut rows: Vec<(Option<&str>, Option<&str>)> = Vec::new();
        for record in &self.records {
            let text = Some(record.notation.as_str());
            let is_black = record
                .mv
                .moved_piece()
                .is_some_and(|piece| piece.alliance().is_black());
            if !is_black {
                rows.push((text, None));
                continue;
            }
            match rows.last_mut() {
                Some(row) if row.0.is_some() && row.1.is_none() => row.1 = text,
                _ => rows.push((None, text)),
            }
        }
        rows
    }
}

/// Where the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The given side is mated
    Checkmate(Alliance),
    /// The given side has no move and is not in check
    Stalemate(Alliance),
    /// Both sides are down to a bare king
    Draw,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate(side) => write!(f, "{side} is in checkmate"),
            GameStatus::Stalemate(side) => write!(f, "{side} is in stalemate"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// A game between two players, human or computer.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    log: MoveLog,
    setup: GameSetup,
}

impl Game {
    /// Start from the standard position.
    #[must_use]
    pub fn new(setup: GameSetup) -> Self {
        Self::from_board(Board::create_standard_board(), setup)
    }

    /// Continue from an arbitrary position with an empty log.
    #[must_use]
    pub fn from_board(board: Board, setup: GameSetup) -> Self {
        Game {
            board,
            log: MoveLog::new(),
            setup,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    #[must_use]
    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    pub fn set_setup(&mut self, setup: GameSetup) {
        self.setup = setup;
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        let player = self.board.current_player();
        if player.is_in_checkmate() {
            GameStatus::Checkmate(player.alliance())
        } else if player.is_in_stalemate() {
            GameStatus::Stalemate(player.alliance())
        } else if player.active_pieces().len() == 1 && player.opponent().active_pieces().len() == 1
        {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true if the computer should move next and the game is not over
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.setup.is_ai_player(self.board.next_move_maker()) && !self.status().is_over()
    }

    /// Strategy for the configured difficulty
    #[must_use]
    pub fn ai_strategy(&self) -> Box<dyn MoveStrategy> {
        self.setup.difficulty.strategy()
    }

    /// Play the move from `from` to `to` for the side to move.
    pub fn play(&mut self, from: Square, to: Square) -> MoveStatus {
        let mv = MoveFactory::create_move(&self.board, from, to);
        self.play_move(&mv)
    }

    /// Play `mv` for the side to move; the board and log only change when
    /// the move goes through.
    pub fn play_move(&mut self, mv: &Move) -> MoveStatus {
        let transition = self.board.current_player().make_move(mv);
        let status = transition.status();
        if !status.is_done() {
            debug!("rejected {mv}: {status}");
            return status;
        }
        let next = transition.into_board();
        let notation = next.annotate(mv);
        self.board = next;
        self.log.add(MoveRecord {
            mv: mv.clone(),
            notation,
        });

        let outcome = self.status();
        if outcome.is_over() {
            info!("game over after {} moves: {outcome}", self.log.len());
        }
        status
    }

    /// Let the configured strategy choose a move on a search thread and play it.
    ///
    /// Returns the move played, or `None` when the side to move had nothing
    /// to play.
    ///
    /// # Errors
    /// [`EngineError::NotAiTurn`] when a human is to move or the game is over;
    /// [`EngineError::Spawn`] and [`EngineError::SearchAborted`] when the
    /// search thread fails.
    pub fn play_ai_turn(&mut self) -> Result<Option<Move>, EngineError> {
        if !self.is_ai_turn() {
            return Err(EngineError::NotAiTurn);
        }
        let job = SearchJob::spawn(self.ai_strategy(), self.board.clone())?;
        let outcome = job.wait().ok_or(EngineError::SearchAborted)?;
        let Some(mv) = outcome.best_move else {
            return Ok(None);
        };
        let status = self.play_move(&mv);
        if status.is_done() {
            Ok(Some(mv))
        } else {
            warn!("{} proposed {mv} but it was {status}", outcome.strategy);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, PieceKind};
    use crate::engine::{Difficulty, PlayerType};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_play_records_moves() {
        let mut game = Game::new(GameSetup::default());
        assert_eq!(game.play(sq("e2"), sq("e4")), MoveStatus::Done);
        assert_eq!(game.play(sq("e7"), sq("e5")), MoveStatus::Done);
        assert_eq!(game.log().len(), 2);
        assert_eq!(game.log().moves()[0].notation, "e4");
        assert_eq!(game.board().next_move_maker(), Alliance::White);
    }

    #[test]
    fn test_log_notation_marks_check() {
        let mut game = Game::new(GameSetup::default());
        for (from, to) in [("e2", "e4"), ("f7", "f6"), ("d1", "h5")] {
            assert!(game.play(sq(from), sq(to)).is_done());
        }
        assert_eq!(game.log().moves()[2].notation, "Qh5+");
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_illegal_play_leaves_game_unchanged() {
        let mut game = Game::new(GameSetup::default());
        assert_eq!(game.play(sq("e2"), sq("e5")), MoveStatus::IllegalMove);
        // Black's pawn while White is to move
        assert_eq!(game.play(sq("e7"), sq("e5")), MoveStatus::IllegalMove);
        assert!(game.log().is_empty());
        assert_eq!(game.board().next_move_maker(), Alliance::White);
    }

    #[test]
    fn test_history_rows_pair_moves() {
        let mut game = Game::new(GameSetup::default());
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
            assert!(game.play(sq(from), sq(to)).is_done());
        }
        let rows = game.log().history_rows();
        assert_eq!(rows, vec![(Some("e4"), Some("e5")), (Some("Nf3"), None)]);
    }

    #[test]
    fn test_taken_pieces_sorted_by_value() {
        let mut game = Game::new(GameSetup::default());
        for (from, to) in [
            ("e2", "e4"),
            ("d7", "d5"),
            ("e4", "d5"),
            ("d8", "d5"),
            ("b1", "c3"),
            ("d5", "d2"),
            ("c1", "d2"),
        ] {
            assert!(game.play(sq(from), sq(to)).is_done(), "{from}{to}");
        }
        let black_losses: Vec<_> = game
            .log()
            .taken_pieces(Alliance::Black)
            .iter()
            .map(Piece::kind)
            .collect();
        assert_eq!(
            black_losses,
            vec![PieceKind::Pawn, PieceKind::Queen]
        );
        let white_losses = game.log().taken_pieces(Alliance::White);
        assert_eq!(white_losses.len(), 2);
        assert!(white_losses[0].value() <= white_losses[1].value());
    }

    #[test]
    fn test_log_remove_and_clear() {
        let mut game = Game::new(GameSetup::default());
        assert!(game.play(sq("e2"), sq("e4")).is_done());
        let mut log = game.log().clone();
        assert!(log.remove(3).is_none());
        assert_eq!(log.remove(0).map(|r| r.notation), Some("e4".to_string()));
        assert!(log.is_empty());
        log.add(game.log().moves()[0].clone());
        log.clear();
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_fools_mate_status() {
        let mut game = Game::new(GameSetup::default());
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            assert!(game.play(sq(from), sq(to)).is_done());
        }
        assert_eq!(game.status(), GameStatus::Checkmate(Alliance::White));
        assert_eq!(game.log().moves()[3].notation, "Qh4#");
    }

    #[test]
    fn test_bare_kings_is_draw() {
        let board = BoardBuilder::new()
            .piece(Piece::new(PieceKind::King, sq("e1"), Alliance::White))
            .piece(Piece::new(PieceKind::King, sq("e8"), Alliance::Black))
            .build()
            .unwrap();
        let game = Game::from_board(board, GameSetup::default());
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(!game.is_ai_turn());
    }

    #[test]
    fn test_ai_turn() {
        let setup = GameSetup::new(PlayerType::Human, PlayerType::Computer, Difficulty::Trivial);
        let mut game = Game::new(setup);
        assert!(!game.is_ai_turn());
        assert!(matches!(game.play_ai_turn(), Err(EngineError::NotAiTurn)));
        assert!(game.play(sq("d2"), sq("d4")).is_done());
        assert!(game.is_ai_turn());
        let mv = game.play_ai_turn().unwrap().unwrap();
        assert_eq!(mv.moved_piece().map(Piece::alliance), Some(Alliance::Black));
        assert_eq!(game.log().len(), 2);
        assert_eq!(game.board().next_move_maker(), Alliance::White);
    }
}
