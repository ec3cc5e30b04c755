//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximises and Black minimises the evaluator's score. Children are
//! produced through [`Player::make_move`](crate::board::Player::make_move)
//! and only moves that go through are searched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use log::{debug, info};

use super::{MoveStrategy, SearchParams, SearchStats};
use crate::board::{Board, BoardEvaluator, Move, StandardEvaluator};

/// Minimax search to a fixed depth.
pub struct Minimax<E = StandardEvaluator> {
    params: SearchParams,
    evaluator: E,
    stats: SearchStats,
}

impl Minimax<StandardEvaluator> {
    /// Search `depth` plies with the standard evaluator.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self::with_params(SearchParams::with_depth(depth))
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        Self::with_evaluator(params, StandardEvaluator)
    }
}

impl<E: BoardEvaluator> Minimax<E> {
    #[must_use]
    pub fn with_evaluator(params: SearchParams, evaluator: E) -> Self {
        Minimax {
            params,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Statistics of the most recent search
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn minimax(&mut self, board: &Board, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 || is_end_game(board) {
            self.stats.evaluations += 1;
            return self.evaluator.evaluate(board, depth);
        }

        let player = board.current_player();
        let maximizing = player.alliance().is_white();
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut explored = false;

        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if !transition.status().is_done() {
                continue;
            }
            explored = true;
            let value = self.minimax(transition.transition_board(), depth - 1, alpha, beta);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        assert!(explored, "{player} has no playable move in a non-terminal position");
        best
    }
}

/// Checkmate or stalemate for the side to move.
fn is_end_game(board: &Board) -> bool {
    !board.current_player().has_escape_moves()
}

impl<E: BoardEvaluator> MoveStrategy for Minimax<E> {
    fn select_move_with_stop(&mut self, board: &Board, stop: &AtomicBool) -> Option<Move> {
        let start = Instant::now();
        let depth = self.params.effective_depth(board);
        self.stats = SearchStats {
            depth,
            ..SearchStats::default()
        };

        let player = board.current_player();
        let maximizing = player.alliance().is_white();
        info!("{player} thinking with depth = {depth}");

        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best: Option<(&Move, i32)> = None;

        for mv in player.legal_moves() {
            if best.is_some() && stop.load(Ordering::Relaxed) {
                debug!("search stopped after {} nodes", self.stats.nodes);
                break;
            }
            let transition = player.make_move(mv);
            if !transition.status().is_done() {
                continue;
            }
            let value = self.minimax(
                transition.transition_board(),
                depth.saturating_sub(1),
                alpha,
                beta,
            );
            debug!("{mv} scored {value}");

            let improves = best.map_or(true, |(_, seen)| {
                if maximizing {
                    value > seen
                } else {
                    value < seen
                }
            });
            if improves {
                best = Some((mv, value));
                if maximizing {
                    alpha = value;
                } else {
                    beta = value;
                }
            }
        }

        self.stats.elapsed = start.elapsed();
        match best {
            Some((mv, value)) => info!("{player} chose {mv} ({value}) {}", self.stats),
            None => info!("{player} has no move {}", self.stats),
        }
        best.map(|(mv, _)| mv.clone())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Alliance, BoardBuilder, Piece, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_hanging_queen() {
        let board = BoardBuilder::new()
            .piece(Piece::new(PieceKind::King, sq("g1"), Alliance::White))
            .piece(Piece::new(PieceKind::Rook, sq("d1"), Alliance::White))
            .piece(Piece::new(PieceKind::Queen, sq("d6"), Alliance::Black))
            .piece(Piece::new(PieceKind::King, sq("h8"), Alliance::Black))
            .build()
            .unwrap();
        let mut minimax = Minimax::with_params(SearchParams {
            depth: 1,
            endgame_depth_bonus: 0,
            ..SearchParams::default()
        });
        let mv = minimax.select_move(&board).unwrap();
        assert_eq!(mv.to_string(), "Rxd6");
    }

    #[test]
    fn test_endgame_depth_bonus_applied() {
        let board = BoardBuilder::new()
            .piece(Piece::new(PieceKind::King, sq("e1"), Alliance::White))
            .piece(Piece::new(PieceKind::King, sq("e8"), Alliance::Black))
            .build()
            .unwrap();
        let params = SearchParams::with_depth(1);
        assert_eq!(params.effective_depth(&board), 5);
        let standard = Board::create_standard_board();
        assert_eq!(params.effective_depth(&standard), 1);
    }

    #[test]
    fn test_stats_recorded() {
        let board = Board::create_standard_board();
        let mut minimax = Minimax::new(2);
        assert!(minimax.select_move(&board).is_some());
        let stats = minimax.stats();
        assert_eq!(stats.depth, 2);
        assert!(stats.nodes >= 20);
        assert!(stats.evaluations > 0);
    }

    #[test]
    fn test_stop_flag_still_returns_a_move() {
        let board = Board::create_standard_board();
        let stop = AtomicBool::new(true);
        let mv = Minimax::new(3).select_move_with_stop(&board, &stop);
        assert!(mv.is_some());
    }

    #[test]
    fn test_no_move_when_checkmated() {
        // Back-rank mate: black rook on a1, white king boxed in on h1.
        let board = BoardBuilder::new()
            .piece(Piece::new(PieceKind::King, sq("h1"), Alliance::White))
            .piece(Piece::new(PieceKind::Pawn, sq("g2"), Alliance::White))
            .piece(Piece::new(PieceKind::Pawn, sq("h2"), Alliance::White))
            .piece(Piece::new(PieceKind::Rook, sq("a1"), Alliance::Black))
            .piece(Piece::new(PieceKind::King, sq("e8"), Alliance::Black))
            .build()
            .unwrap();
        assert!(board.current_player().is_in_checkmate());
        assert_eq!(Minimax::new(2).select_move(&board), None);
    }
}
