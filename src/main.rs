//! Self-play driver.
//!
//! Usage: `minimax_chess [white-difficulty] [black-difficulty] [max-plies]`.
//! Difficulties are `trivial`, `easy`, `medium` or `hard`. Set `RUST_LOG`
//! to see search progress.

use std::env;
use std::process::ExitCode;

use log::error;

use minimax_chess::engine::{Difficulty, EngineError, Game, GameSetup, PlayerType};

const DEFAULT_MAX_PLIES: usize = 200;

struct Args {
    white: Difficulty,
    black: Difficulty,
    max_plies: usize,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let difficulty = |index: usize, default: Difficulty| -> Result<Difficulty, String> {
        args.get(index)
            .map_or(Ok(default), |s| s.parse().map_err(|e: EngineError| e.to_string()))
    };
    let max_plies = match args.get(2) {
        Some(s) => s
            .parse()
            .map_err(|_| format!("max-plies must be a number, got '{s}'"))?,
        None => DEFAULT_MAX_PLIES,
    };
    Ok(Args {
        white: difficulty(0, Difficulty::Trivial)?,
        black: difficulty(1, Difficulty::Trivial)?,
        max_plies,
    })
}

fn run(args: &Args) -> Result<(), EngineError> {
    let mut game = Game::new(GameSetup::new(
        PlayerType::Computer,
        PlayerType::Computer,
        args.white,
    ));
    println!("{}", game.board());

    while game.log().len() < args.max_plies && !game.status().is_over() {
        let side = game.board().next_move_maker();
        let difficulty = side.choose(args.white, args.black);
        game.set_setup(GameSetup {
            difficulty,
            ..*game.setup()
        });
        match game.play_ai_turn()? {
            Some(mv) => {
                let notation = game
                    .log()
                    .moves()
                    .last()
                    .map_or_else(|| mv.to_string(), |record| record.notation.clone());
                println!("{:>3}. {side} ({difficulty}): {notation}", game.log().len());
                println!("{}", game.board());
            }
            None => break,
        }
    }

    println!("result: {}", game.status());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: minimax_chess [white-difficulty] [black-difficulty] [max-plies]");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("self-play stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
