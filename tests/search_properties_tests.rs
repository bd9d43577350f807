//! §8 universal properties: move legality, alpha-beta equivalence, and
//! transposition-table invariance.

use checkmate_core::board::Board;
use checkmate_core::context::EngineContext;
use checkmate_core::moves::movegen::generate_legal_moves;
use checkmate_core::moves::square_control::{checkers, checkers_of};
use checkmate_core::search::tt::TranspositionTable;
use std::str::FromStr;

/// Reference negamax without pruning: always explores every move, never
/// breaks on a bound. Used only to cross-check `minimax`'s chosen move.
fn best_move_unpruned(board: &Board, depth: i32, ctx: &mut EngineContext) -> (i32, Option<checkmate_core::moves::types::Move>) {
    if depth == 0 {
        return (checkmate_core::search::eval::evaluate(board, ctx), None);
    }
    let moves = generate_legal_moves(board, &ctx.attacks);
    if moves.is_empty() {
        let score = if checkers(board, &ctx.attacks) != 0 {
            match board.side_to_move {
                checkmate_core::board::Color::Black => checkmate_core::config::INF,
                checkmate_core::board::Color::White => -checkmate_core::config::INF,
            }
        } else {
            0
        };
        return (score, None);
    }

    let maximizing = board.side_to_move == checkmate_core::board::Color::White;
    let mut best_score = if maximizing { -checkmate_core::config::INF } else { checkmate_core::config::INF };
    let mut best_move = None;
    for mv in moves.iter() {
        let mut child = board.apply_move(*mv);
        child.depth = depth - 1;
        let (score, _) = best_move_unpruned(&child, depth - 1, &mut *ctx);
        let improves = if maximizing { score > best_score } else { score < best_score };
        if best_move.is_none() || improves {
            best_score = score;
            best_move = Some(*mv);
        }
    }
    (best_score, best_move)
}

#[test]
fn legal_moves_never_leave_the_mover_in_check() {
    let ctx = EngineContext::for_tests();
    let positions = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ];
    for fen in positions {
        let board = Board::from_str(fen).unwrap();
        for mv in generate_legal_moves(&board, &ctx.attacks) {
            let after = board.apply_move(mv);
            assert_eq!(checkers_of(&after, board.side_to_move, &ctx.attacks), 0);
        }
    }
}

#[test]
fn shallow_alpha_beta_search_agrees_with_unpruned_negamax() {
    let mut board = Board::from_str("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    board.depth = 2;
    let mut ctx = EngineContext::for_tests();

    let pruned_value = checkmate_core::search::minimax(
        &board,
        -checkmate_core::config::INF,
        checkmate_core::config::INF,
        true,
        std::time::Instant::now() + std::time::Duration::from_secs(5),
        true,
        &mut ctx,
    );

    let (reference_value, _) = best_move_unpruned(&board, 2, &mut ctx);
    assert_eq!(pruned_value, reference_value);
}

#[test]
fn transposition_invariance_probe_after_store_and_save_then_load() {
    let mut tt = TranspositionTable::new(1024);
    tt.store(12345, 77, 3);
    assert_eq!(tt.probe(12345), Some((77, 3)));

    let dir = std::env::temp_dir().join("checkmate-core-tt-prop-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("heuristicDict.dat");
    tt.store(999, -40, 9);
    tt.save(&path);

    let loaded = TranspositionTable::load_or_empty(&path, 1024);
    assert_eq!(loaded.probe(12345), Some((77, 3)));
    assert_eq!(loaded.probe(999), Some((-40, 9)));
    let _ = std::fs::remove_dir_all(&dir);
}
