use std::env;

use minimax_chess::board::{Board, MoveFactory, Square};

fn parse_pair(text: &str) -> Option<(Square, Square)> {
    let from = text.get(0..2)?.parse().ok()?;
    let to = text.get(2..4)?.parse().ok()?;
    Some((from, to))
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...   (moves like e2e4)");
        return;
    }

    let mut board = Board::create_standard_board();
    for text in args.iter().skip(1) {
        let Some((from, to)) = parse_pair(text) else {
            eprintln!("bad move text: {text}");
            return;
        };
        let mv = MoveFactory::create_move(&board, from, to);
        let transition = board.current_player().make_move(&mv);
        if !transition.status().is_done() {
            eprintln!("{text}: {}", transition.status());
            return;
        }
        board = transition.into_board();
    }

    let player = board.current_player();
    println!("{board}");
    println!("side_to_move: {}", player.alliance());
    println!("legal_moves: {}", player.legal_moves().len());
    println!("in_check: {}", player.is_in_check());
    println!("checkmate: {}", player.is_in_checkmate());
    println!("stalemate: {}", player.is_in_stalemate());
    for mv in player.legal_moves() {
        println!("{}", board.move_notation(mv));
    }
}
