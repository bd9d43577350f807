//! The six concrete scenarios from §8.

use checkmate_core::board::{Board, Piece};
use checkmate_core::context::EngineContext;
use checkmate_core::moves::movegen::generate_legal_moves;
use checkmate_core::moves::square_control::checkers;
use checkmate_core::search::best_move;
use std::str::FromStr;
use std::time::Duration;

fn mv_str(board: &Board, ctx: &EngineContext, from: &str, to: &str) -> bool {
    let from = checkmate_core::square::Square::from_algebraic(from).unwrap();
    let to = checkmate_core::square::Square::from_algebraic(to).unwrap();
    generate_legal_moves(board, &ctx.attacks)
        .iter()
        .any(|m| m.from == from && m.to == to)
}

#[test]
fn scenario_1_startpos_perft_one_is_20() {
    let board =
        Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let ctx = EngineContext::for_tests();
    assert_eq!(generate_legal_moves(&board, &ctx.attacks).len(), 20);
}

#[test]
fn scenario_2_kiwipete_perft_two_is_2039() {
    let board =
        Board::from_str("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    let tables = checkmate_core::moves::magic::AttackTables::build(checkmate_core::config::MAGIC_SEARCH_SEED);
    assert_eq!(checkmate_core::moves::perft::perft(&board, 2, &tables), 2_039);
}

#[test]
fn scenario_3_en_passant_is_legal_and_resolves_correctly() {
    let board = Board::from_str("8/8/8/2k5/5Pp1/8/8/4K3 b - f3 0 1").unwrap();
    let ctx = EngineContext::for_tests();
    assert!(mv_str(&board, &ctx, "g4", "f3"));

    let from = checkmate_core::square::Square::from_algebraic("g4").unwrap();
    let to = checkmate_core::square::Square::from_algebraic("f3").unwrap();
    let mv = generate_legal_moves(&board, &ctx.attacks)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .unwrap();
    let next = board.apply_move(mv);
    assert_eq!(next.piece_at(checkmate_core::square::Square::from_algebraic("g4").unwrap()), None);
    assert_eq!(next.piece_at(checkmate_core::square::Square::from_algebraic("f4").unwrap()), None);
}

#[test]
fn scenario_4_castling_through_check_is_illegal() {
    let board = Board::from_str("4k3/8/8/8/8/8/4r3/4K2R w K - 0 1").unwrap();
    let ctx = EngineContext::for_tests();
    assert!(!mv_str(&board, &ctx, "e1", "g1"));
}

#[test]
fn scenario_5_queen_promotion_only() {
    let board = Board::from_str("8/4P3/8/8/8/8/8/4K2k w - - 0 1").unwrap();
    let ctx = EngineContext::for_tests();
    assert!(mv_str(&board, &ctx, "e7", "e8"));

    let from = checkmate_core::square::Square::from_algebraic("e7").unwrap();
    let to = checkmate_core::square::Square::from_algebraic("e8").unwrap();
    let mv = generate_legal_moves(&board, &ctx.attacks)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .unwrap();
    let next = board.apply_move(mv);
    assert_eq!(
        next.piece_at(checkmate_core::square::Square::from_algebraic("e8").unwrap()),
        Some((checkmate_core::board::Color::White, Piece::Queen))
    );
    assert_eq!(next.piece_at(checkmate_core::square::Square::from_algebraic("e7").unwrap()), None);
}

#[test]
fn scenario_6_back_rank_mate_found_at_depth_two() {
    let mut board = Board::from_str("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1").unwrap();
    board.depth = 2;
    let mut ctx = EngineContext::for_tests();
    let mv = best_move(&board, 2, Duration::from_secs(5), 2, &mut ctx);
    assert_eq!(mv.from.to_string(), "a1");
    assert_eq!(mv.to.to_string(), "a8");

    let mated = board.apply_move(mv);
    assert_ne!(checkers(&mated, &ctx.attacks), 0);
    assert!(generate_legal_moves(&mated, &ctx.attacks).is_empty());
}
