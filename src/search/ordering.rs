//! Move ordering (§4.H, "Move ordering"): apply each candidate move to a
//! scratch board, score it with a shallow `evaluate` call, and sort
//! descending. The sort is unconditionally descending rather than
//! side-aware — suboptimal for Black nodes, kept for parity with the
//! donor and the spec's explicit permission to keep it (§9, §9.1).

use crate::board::Board;
use crate::context::EngineContext;
use crate::moves::types::Move;
use crate::search::eval::evaluate;

/// Scores every move by `evaluate(child)` and sorts descending. Uses a
/// merge sort (`sort_by` is a stable merge sort over slices) so moves
/// that tie in score keep their move-generation order.
pub fn order_moves(moves: &mut [Move], board: &Board, ctx: &mut EngineContext) {
    let scored: Vec<(Move, i32)> = moves
        .iter()
        .map(|&mv| {
            let child = board.apply_move(mv);
            (mv, evaluate(&child, &mut *ctx))
        })
        .collect();

    let mut scored = scored;
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    for (slot, (mv, _)) in moves.iter_mut().zip(scored.into_iter()) {
        *slot = mv;
    }
}
