//! Static evaluation.
//!
//! Scores are from White's point of view: positive favours White, negative
//! favours Black. Each side is scored on its own and the two are subtracted.

use super::masks::{EIGHTH_COLUMN, EIGHTH_RANK, FIRST_COLUMN, FIRST_RANK};
use super::{Board, PieceKind, Player};

const CHECK_BONUS: i32 = 50;
const CHECKMATE_BONUS: i32 = 100_000;
const DEPTH_BONUS: i32 = 10;
const CASTLE_BONUS: i32 = 40;
const MOBILITY_MULTIPLIER: i32 = 2;
const ATTACK_MULTIPLIER: i32 = 2;
const TWO_BISHOPS_BONUS: i32 = 50;
const DOUBLED_PAWN_PENALTY: i32 = 50;
const KNIGHT_EDGE_PENALTY: i32 = 100;

/// Scores a position for the search.
pub trait BoardEvaluator: Send {
    /// `depth` is the remaining search depth at the scored node.
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

/// Material, mobility and a handful of positional terms.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEvaluator;

impl BoardEvaluator for StandardEvaluator {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        score_player(&board.white_player(), depth) - score_player(&board.black_player(), depth)
    }
}

fn score_player(player: &Player<'_>, depth: u32) -> i32 {
    material(player)
        + checkmate(player, depth)
        + check(player)
        + castle(player)
        + mobility(player)
        + attacks(player)
        + pawn_structure(player)
        + knight_structure(player)
        + king_safety(player)
        + rook_structure(player)
}

fn material(player: &Player<'_>) -> i32 {
    let pieces = player.active_pieces();
    let bishops = pieces
        .iter()
        .filter(|p| p.kind() == PieceKind::Bishop)
        .count();
    let value: i32 = pieces.iter().map(|p| p.value()).sum();
    if bishops >= 2 {
        value + TWO_BISHOPS_BONUS
    } else {
        value
    }
}

/// Mates found with more depth left are worth more, so faster mates win.
fn checkmate(player: &Player<'_>, depth: u32) -> i32 {
    if player.opponent().is_in_checkmate() {
        CHECKMATE_BONUS * depth_bonus(depth)
    } else {
        0
    }
}

fn depth_bonus(depth: u32) -> i32 {
    if depth == 0 {
        1
    } else {
        DEPTH_BONUS * depth as i32
    }
}

fn check(player: &Player<'_>) -> i32 {
    if player.opponent().is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

fn castle(player: &Player<'_>) -> i32 {
    if player.is_castled() {
        CASTLE_BONUS
    } else {
        0
    }
}

fn mobility(player: &Player<'_>) -> i32 {
    MOBILITY_MULTIPLIER
        * mobility_ratio(
            player.legal_moves().len(),
            player.opponent().legal_moves().len(),
        )
}

/// Own move count per hundred opponent moves. A side with no moves at all
/// counts as one so the ratio stays finite.
fn mobility_ratio(own: usize, theirs: usize) -> i32 {
    (own * 100 / theirs.max(1)) as i32
}

/// Captures where the attacker is worth no more than its victim.
fn attacks(player: &Player<'_>) -> i32 {
    let count = player
        .legal_moves()
        .iter()
        .filter_map(|mv| Some((mv.moved_piece()?, mv.attacked_piece()?)))
        .filter(|(attacker, victim)| attacker.value() <= victim.value())
        .count() as i32;
    ATTACK_MULTIPLIER * count
}

/// Penalty for each pawn with a friendly pawn directly behind it.
fn pawn_structure(player: &Player<'_>) -> i32 {
    let board = player.board();
    let behind = -8 * player.alliance().direction();
    let doubled = player
        .active_pieces()
        .iter()
        .filter(|p| p.kind() == PieceKind::Pawn)
        .filter_map(|p| p.square().offset(behind))
        .filter_map(|sq| board.piece_at(sq))
        .filter(|p| p.kind() == PieceKind::Pawn && p.alliance() == player.alliance())
        .count() as i32;
    -DOUBLED_PAWN_PENALTY * doubled
}

/// Knights on an edge rank or file are penalised once per edge they touch.
fn knight_structure(player: &Player<'_>) -> i32 {
    player
        .active_pieces()
        .iter()
        .filter(|p| p.kind() == PieceKind::Knight)
        .map(|p| {
            [FIRST_RANK, EIGHTH_RANK, FIRST_COLUMN, EIGHTH_COLUMN]
                .iter()
                .filter(|edge| edge.contains(p.square()))
                .count() as i32
        })
        .sum::<i32>()
        * -KNIGHT_EDGE_PENALTY
}

/// Placeholder term; always zero.
fn king_safety(_player: &Player<'_>) -> i32 {
    0
}

/// Placeholder term; always zero.
fn rook_structure(_player: &Player<'_>) -> i32 {
    0
}
