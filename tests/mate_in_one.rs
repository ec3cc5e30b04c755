use serde::Deserialize;

use minimax_chess::board::{
    Alliance, Board, BoardBuilder, Minimax, Move, MoveFactory, MoveStrategy, Piece, PieceKind,
    SearchParams, Square,
};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    /// Moves from the standard position, e.g. `e2e4 e7e5`
    #[serde(default)]
    line: String,
    /// Set-up position instead of a line; upper case is White
    #[serde(default)]
    pieces: Vec<String>,
    #[serde(default)]
    black_to_move: bool,
    best: String,
}

fn squares(text: &str) -> (Square, Square) {
    (text[0..2].parse().unwrap(), text[2..4].parse().unwrap())
}

fn play_line(line: &str) -> Board {
    line.split_whitespace().fold(Board::create_standard_board(), |board, text| {
        let (from, to) = squares(text);
        let mv = MoveFactory::create_move(&board, from, to);
        let transition = board.current_player().make_move(&mv);
        assert!(transition.status().is_done(), "{text} should be playable");
        transition.into_board()
    })
}

fn set_up(pieces: &[String], black_to_move: bool) -> Board {
    let builder = pieces.iter().fold(BoardBuilder::new(), |builder, text| {
        let letter = text.chars().next().unwrap();
        let kind = PieceKind::from_char(letter).unwrap();
        let alliance = if letter.is_ascii_uppercase() {
            Alliance::White
        } else {
            Alliance::Black
        };
        builder.piece(Piece::new(kind, text[1..].parse().unwrap(), alliance))
    });
    let side = if black_to_move {
        Alliance::Black
    } else {
        Alliance::White
    };
    builder.move_maker(side).build().unwrap()
}

fn problem_board(problem: &Problem) -> Board {
    if problem.pieces.is_empty() {
        play_line(&problem.line)
    } else {
        set_up(&problem.pieces, problem.black_to_move)
    }
}

fn solve(board: &Board) -> Option<Move> {
    let params = SearchParams {
        depth: 2,
        endgame_depth_bonus: 0,
        ..SearchParams::default()
    };
    Minimax::with_params(params).select_move(board)
}

#[test]
fn problem_suite() {
    let data = include_str!("data/problems.json");
    let set: ProblemSet = serde_json::from_str(data).unwrap();
    assert!(!set.problems.is_empty());

    for problem in &set.problems {
        let board = problem_board(problem);
        let (from, to) = squares(&problem.best);
        let best = solve(&board)
            .unwrap_or_else(|| panic!("{} ({}): no move found", problem.name, problem.kind));
        assert_eq!(
            (best.current_square(), best.destination()),
            (Some(from), Some(to)),
            "{} ({}): expected {}, got {best}",
            problem.name,
            problem.kind,
            problem.best
        );

        if problem.kind == "Mate in One" {
            let after = board.current_player().make_move(&best).into_board();
            assert!(
                after.current_player().is_in_checkmate(),
                "{}: {best} should mate",
                problem.name
            );
        }
    }
}
