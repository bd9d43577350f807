//! Zobrist consistency (§8): equal positions hash equal, and hashing is
//! sensitive to every field the key formula covers (pieces, en-passant,
//! castling rights, side to move).

use checkmate_core::board::Board;
use checkmate_core::context::EngineContext;
use checkmate_core::moves::movegen::generate_legal_moves;
use std::str::FromStr;

#[test]
fn equal_positions_reached_by_different_move_orders_hash_equal() {
    let ctx = EngineContext::for_tests();

    let mut via_a = Board::new();
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
        via_a = apply_named(&via_a, &ctx, from, to);
    }

    let mut via_b = Board::new();
    for (from, to) in [("g1", "f3"), ("b8", "c6"), ("e2", "e4"), ("e7", "e5")] {
        via_b = apply_named(&via_b, &ctx, from, to);
    }

    assert_eq!(via_a, via_b);
    assert_eq!(ctx.zobrist.hash(&via_a), ctx.zobrist.hash(&via_b));
}

#[test]
fn losing_a_castling_right_changes_the_hash() {
    let ctx = EngineContext::for_tests();
    let both = Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let one_lost = Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Qkq - 0 1").unwrap();
    assert_ne!(ctx.zobrist.hash(&both), ctx.zobrist.hash(&one_lost));
}

#[test]
fn side_to_move_is_part_of_the_hash() {
    let ctx = EngineContext::for_tests();
    let white_to_move = Board::from_str("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let black_to_move = Board::from_str("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
    assert_ne!(ctx.zobrist.hash(&white_to_move), ctx.zobrist.hash(&black_to_move));
}

fn apply_named(board: &Board, ctx: &EngineContext, from: &str, to: &str) -> Board {
    let from = checkmate_core::square::Square::from_algebraic(from).unwrap();
    let to = checkmate_core::square::Square::from_algebraic(to).unwrap();
    let mv = generate_legal_moves(board, &ctx.attacks)
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .unwrap_or_else(|| panic!("no legal move {from}{to}"));
    board.apply_move(mv)
}
