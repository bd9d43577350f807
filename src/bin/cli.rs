//! The engine's external collaborator (§6): a single executable taking no
//! arguments (an interactive REPL), `--api <FEN>` to emit one chosen move
//! and exit, or `--train` to report that opening-book generation lives
//! outside the engine core (§1: the opening book is out of scope).

use checkmate_core::board::Board;
use checkmate_core::config;
use checkmate_core::context::EngineContext;
use checkmate_core::moves::movegen::generate_legal_moves;
use checkmate_core::moves::types::Move;
use checkmate_core::search::best_move;
use checkmate_core::status::{position_status, GameStatus};
use std::io::{self, BufRead};
use std::str::FromStr;
use std::time::Duration;

const SEARCH_MIN_DEPTH: i32 = 4;
const SEARCH_TIME_BUDGET: Duration = Duration::from_secs(3);

fn main() {
    checkmate_core::logger::init_logging("engine.log", "info");

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("--api") => {
            let fen = args.next().unwrap_or_else(|| {
                eprintln!("--api requires a FEN argument");
                std::process::exit(1);
            });
            run_api(&fen);
        }
        Some("--train") => {
            println!("opening-book training is outside the engine core");
        }
        Some(other) => {
            eprintln!("unrecognized argument: {other}");
            std::process::exit(1);
        }
        None => run_repl(),
    }
}

fn run_api(fen: &str) {
    let mut ctx = EngineContext::load(config::DEFAULT_ZOBRIST_SEED_PATH, config::DEFAULT_TT_PATH);
    let board = match Board::from_str(fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid FEN: {err}");
            std::process::exit(1);
        }
    };
    let mv = best_move(&board, SEARCH_MIN_DEPTH, SEARCH_TIME_BUDGET, config::DEFAULT_DEPTH_STEP, &mut ctx);
    println!("{mv}");
    ctx.tt.save(config::DEFAULT_TT_PATH);
}

fn run_repl() {
    let mut ctx = EngineContext::load(config::DEFAULT_ZOBRIST_SEED_PATH, config::DEFAULT_TT_PATH);
    let mut board = Board::new();
    println!("{board}");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line.trim().to_string(),
            Err(_) => break,
        };

        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        match parse_move(&line, &board, &ctx) {
            Some(mv) => {
                board = board.apply_move(mv);
            }
            None => {
                println!("{}", checkmate_core::errors::EngineError::IllegalMove(line));
                continue;
            }
        }

        match position_status(&board, &ctx.attacks) {
            GameStatus::Checkmate => {
                println!("checkmate");
                break;
            }
            GameStatus::Stalemate => {
                println!("stalemate");
                break;
            }
            GameStatus::InPlay => {}
        }

        let reply = best_move(&board, SEARCH_MIN_DEPTH, SEARCH_TIME_BUDGET, config::DEFAULT_DEPTH_STEP, &mut ctx);
        println!("{reply}");
        board = board.apply_move(reply);

        match position_status(&board, &ctx.attacks) {
            GameStatus::Checkmate => {
                println!("checkmate");
                break;
            }
            GameStatus::Stalemate => {
                println!("stalemate");
                break;
            }
            GameStatus::InPlay => {}
        }
    }

    ctx.tt.save(config::DEFAULT_TT_PATH);
}

/// Matches a §6 move string (`frfr`, with an optional ignored promotion
/// suffix) against the legal moves from `board`; only queen promotions
/// are ever generated, so the suffix is accepted but not interpreted.
fn parse_move(text: &str, board: &Board, ctx: &EngineContext) -> Option<Move> {
    if text.len() < 4 {
        return None;
    }
    let from = checkmate_core::square::Square::from_algebraic(&text[0..2])?;
    let to = checkmate_core::square::Square::from_algebraic(&text[2..4])?;

    generate_legal_moves(board, &ctx.attacks)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to)
}
