//! Game-end status (§4.D, closing note; §7: `NoLegalMoves`). Deliberately
//! minimal: the source tracks neither a halfmove clock nor a position
//! history, so threefold-repetition and fifty-move detection are out of
//! scope (§1, Non-goals) — status is derived purely from whether the
//! side to move has any legal moves and whether it is in check.

use crate::board::Board;
use crate::moves::magic::AttackTables;
use crate::moves::movegen::generate_legal_moves;
use crate::moves::square_control::checkers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InPlay,
    Checkmate,
    Stalemate,
}

/// `NoLegalMoves` at the REPL surfaces as checkmate when the side to move
/// is in check, stalemate otherwise (§7).
pub fn position_status(board: &Board, tables: &AttackTables) -> GameStatus {
    if !generate_legal_moves(board, tables).is_empty() {
        return GameStatus::InPlay;
    }
    if checkers(board, tables) != 0 {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}
