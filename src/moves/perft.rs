//! Perft: counts leaf nodes of the legal-move tree at a fixed depth,
//! the standard move-generator correctness benchmark (§8, "Perft
//! correspondence").

use crate::board::Board;
use crate::moves::magic::AttackTables;
use crate::moves::movegen::generate_legal_moves;

pub fn perft(board: &Board, depth: u32, tables: &AttackTables) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_legal_moves(board, tables);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&mv| perft(&board.apply_move(mv), depth - 1, tables))
        .sum()
}
