use super::super::masks::{EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN};
use super::super::{Board, Move, Piece, Square};

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Knight jumps that would land on the wrong side of the board.
fn is_column_exclusion(square: Square, offset: i8) -> bool {
    (FIRST_COLUMN.contains(square) && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN.contains(square) && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN.contains(square) && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN.contains(square) && matches!(offset, -15 | -6 | 10 | 17))
}

impl Board {
    pub(crate) fn generate_knight_moves(&self, knight: &Piece) -> Vec<Move> {
        let from = knight.square();
        KNIGHT_OFFSETS
            .iter()
            .filter(|&&offset| !is_column_exclusion(from, offset))
            .filter_map(|&offset| from.offset(offset))
            .filter_map(|to| self.occupancy_move(knight, to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusions_on_each_guarded_column() {
        let a1: Square = "a1".parse().unwrap();
        let b1: Square = "b1".parse().unwrap();
        let g1: Square = "g1".parse().unwrap();
        let h1: Square = "h1".parse().unwrap();
        assert!(is_column_exclusion(a1, -17));
        assert!(is_column_exclusion(b1, -10));
        assert!(!is_column_exclusion(b1, -17));
        assert!(is_column_exclusion(g1, -6));
        assert!(!is_column_exclusion(g1, -15));
        assert!(is_column_exclusion(h1, -15));
    }
}
