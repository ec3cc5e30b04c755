use super::super::masks::{EIGHTH_COLUMN, FIRST_COLUMN};
use super::super::{Alliance, Board, Move, Piece, Square};

/// Pawn offsets in forward steps: push, jump, and the two diagonals.
const PUSH: i8 = 8;
const JUMP: i8 = 16;
const DIAGONAL_SEVEN: i8 = 7;
const DIAGONAL_NINE: i8 = 9;

/// Diagonal steps that would wrap to the other edge.
///
/// The offset-7 diagonal leans towards the h-file for White and the a-file
/// for Black; offset 9 is the mirror image.
fn is_diagonal_exclusion(square: Square, alliance: Alliance, offset: i8) -> bool {
    let (white_edge, black_edge) = match offset {
        DIAGONAL_SEVEN => (EIGHTH_COLUMN, FIRST_COLUMN),
        _ => (FIRST_COLUMN, EIGHTH_COLUMN),
    };
    alliance.choose(white_edge, black_edge).contains(square)
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        let from = pawn.square();
        let alliance = pawn.alliance();
        let direction = alliance.direction();

        for offset in [PUSH, JUMP, DIAGONAL_SEVEN, DIAGONAL_NINE] {
            let Some(to) = from.offset(direction * offset) else {
                continue;
            };

            match offset {
                PUSH => {
                    if self.piece_at(to).is_none() {
                        moves.push(promote_if_needed(alliance, to, Move::pawn(*pawn, to)));
                    }
                }
                JUMP => {
                    if pawn.is_first_move() && alliance.is_pawn_start_square(from) {
                        let between_empty = from
                            .offset(direction * PUSH)
                            .is_some_and(|between| self.piece_at(between).is_none());
                        if between_empty && self.piece_at(to).is_none() {
                            moves.push(Move::pawn_jump(*pawn, to));
                        }
                    }
                }
                _ => {
                    if is_diagonal_exclusion(from, alliance, offset) {
                        continue;
                    }
                    if let Some(mv) = self.pawn_capture(pawn, to, offset) {
                        moves.push(promote_if_needed(alliance, to, mv));
                    }
                }
            }
        }
        moves
    }

    /// Capture onto `to`, or en passant when `to` is empty and the pawn that
    /// just jumped stands beside us on the same side as `to`.
    fn pawn_capture(&self, pawn: &Piece, to: Square, offset: i8) -> Option<Move> {
        let alliance = pawn.alliance();
        match self.piece_at(to) {
            Some(other) if other.alliance() != alliance => {
                Some(Move::pawn_attack(*pawn, to, *other))
            }
            Some(_) => None,
            None => {
                let ep_pawn = self.en_passant_pawn()?;
                let beside = if offset == DIAGONAL_SEVEN {
                    -alliance.direction()
                } else {
                    alliance.direction()
                };
                let adjacent = pawn.square().offset(beside)?;
                (ep_pawn.square() == adjacent && ep_pawn.alliance() != alliance)
                    .then(|| Move::en_passant(*pawn, to, *ep_pawn))
            }
        }
    }
}

/// Squares a pawn covers diagonally, whether or not anything stands there.
pub(crate) fn pawn_diagonals(pawn: &Piece) -> impl Iterator<Item = Square> + '_ {
    [DIAGONAL_SEVEN, DIAGONAL_NINE]
        .into_iter()
        .filter(|&offset| !is_diagonal_exclusion(pawn.square(), pawn.alliance(), offset))
        .filter_map(|offset| pawn.square().offset(pawn.alliance().direction() * offset))
}

fn promote_if_needed(alliance: Alliance, to: Square, mv: Move) -> Move {
    if alliance.is_pawn_promotion_square(to) {
        Move::promotion(mv)
    } else {
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_diagonals_on_edge() {
        let pawn = Piece::new(crate::board::PieceKind::Pawn, "a2".parse().unwrap(), Alliance::White);
        let covered: Vec<String> = pawn_diagonals(&pawn).map(|sq| sq.to_string()).collect();
        assert_eq!(covered, vec!["b3".to_string()]);
    }

    #[test]
    fn test_diagonal_exclusions_mirror_by_side() {
        let h2: Square = "h2".parse().unwrap();
        let a7: Square = "a7".parse().unwrap();
        assert!(is_diagonal_exclusion(h2, Alliance::White, DIAGONAL_SEVEN));
        assert!(!is_diagonal_exclusion(h2, Alliance::White, DIAGONAL_NINE));
        assert!(is_diagonal_exclusion(a7, Alliance::Black, DIAGONAL_SEVEN));
        assert!(!is_diagonal_exclusion(a7, Alliance::Black, DIAGONAL_NINE));
    }
}
