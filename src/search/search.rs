//! Search (§4.H): recursive alpha-beta minimax plus an iterative-deepening
//! driver. No reverse-futility, late-move, or null-move pruning — the
//! donor's feature-richest minimax variant is iterative deepening with
//! move ordering, a single-ply capture extension, and deadline
//! propagation, and that is what this module implements.

use crate::board::{Board, Color};
use crate::config;
use crate::context::EngineContext;
use crate::moves::movegen::generate_legal_moves;
use crate::moves::square_control::checkers;
use crate::moves::types::Move;
use crate::search::eval::evaluate;
use crate::search::ordering::order_moves;
use std::time::{Duration, Instant};

/// `minimax(pos, alpha, beta, maximizing, deadline, mustFinish)` (§4.H).
#[allow(clippy::too_many_arguments)]
pub fn minimax(
    pos: &Board,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    deadline: Instant,
    must_finish: bool,
    ctx: &mut EngineContext,
) -> i32 {
    if Instant::now() >= deadline && !must_finish {
        return if maximizing { -config::INF } else { config::INF };
    }

    let key = ctx.zobrist.hash(pos);
    if let Some((score, depth)) = ctx.tt.probe(key) {
        if depth as i32 >= pos.depth {
            return score;
        }
    }

    if pos.depth == 0 {
        return evaluate(pos, ctx);
    }

    let mut moves = generate_legal_moves(pos, &ctx.attacks);
    order_moves(&mut moves, pos, ctx);

    if moves.is_empty() {
        let score = if checkers(pos, &ctx.attacks) != 0 {
            match pos.side_to_move {
                Color::Black => config::INF,  // Black is mated: White wins.
                Color::White => -config::INF, // White is mated: Black wins.
            }
        } else {
            0 // Stalemate.
        };
        return score;
    }

    let mut best = if maximizing { -config::INF } else { config::INF };
    for mv in moves.iter() {
        let mut child = pos.apply_move(*mv);
        if child.depth == 0 && pos.piece_at(mv.to).is_some() {
            child.depth = 1;
        }

        let value = minimax(&child, alpha, beta, !maximizing, deadline, must_finish, ctx);

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    ctx.tt.store(key, best, pos.depth.clamp(0, u8::MAX as i32) as u8);
    best
}

/// `bestMove(root, minDepth, timeBudget, depthStep, verbose)` (§4.H).
///
/// Deepens the search frontier by `depth_step` plies at a time, always
/// committing a real move once the shallowest iteration (`depthFrontier
/// <= minDepth`) finishes, even if the clock ran out mid-iteration.
pub fn best_move(
    root: &Board,
    min_depth: i32,
    time_budget: Duration,
    depth_step: i32,
    ctx: &mut EngineContext,
) -> Move {
    let start = Instant::now();
    let deadline = start + time_budget;

    let root_moves = generate_legal_moves(root, &ctx.attacks);
    let fallback = *root_moves.first().expect("bestMove called with no legal moves");

    let mut depth_frontier = root.depth;
    let mut best: Option<Move> = None;
    // The child of every root move shares the same turn (the side that
    // did not just move); the comparison convention is fixed once here.
    let child_maximizing = root.side_to_move.opposite() == Color::White;
    let mut best_val = if child_maximizing { -config::INF } else { config::INF };

    loop {
        let must_finish = depth_frontier <= min_depth;
        if Instant::now() > deadline && !must_finish {
            break;
        }

        let mut iteration_best: Option<Move> = None;
        let mut iteration_val = if child_maximizing { -config::INF } else { config::INF };

        for mv in root_moves.iter() {
            let mut child = root.apply_move(*mv);
            child.depth = depth_frontier;
            let value = minimax(&child, -config::INF, config::INF, child_maximizing, deadline, must_finish, ctx);

            let improves = if child_maximizing { value > iteration_val } else { value < iteration_val };
            if iteration_best.is_none() || improves {
                iteration_val = value;
                iteration_best = Some(*mv);
            }
        }

        if Instant::now() <= deadline || must_finish {
            best = iteration_best;
            best_val = iteration_val;
        }

        if best_val.abs() >= config::INF {
            break;
        }

        depth_frontier += depth_step;
        if Instant::now() > deadline && depth_frontier > min_depth {
            break;
        }
    }

    best.unwrap_or(fallback)
}
