//! Derived, pure queries over a `Board` (§4.C): `checkers`, `pinned`, and
//! `attackedByOpponent`. These never mutate anything and cost one pass
//! over a handful of bitboards each.

use crate::bitboard::{shift_ne, shift_nw, shift_se, shift_sw, BitBoard, BitboardExt, FULL};
use crate::board::{Board, Color, Piece};
use crate::moves::attacks::between;
use crate::moves::magic::AttackTables;
use crate::square::Square;

/// Enemy pieces currently giving check to `color`'s king (§4.C).
pub fn checkers_of(board: &Board, color: Color, tables: &AttackTables) -> BitBoard {
    let enemy = color.opposite();
    let king_sq = board.king_square(color);
    let king_bb = 1u64 << king_sq.index();
    let occ = board.occupied();

    let pawn_checkers = match enemy {
        // A White pawn attacks NE/NW of its own square, so it threatens our
        // king from SW/SE of the king's square.
        Color::White => shift_sw(king_bb) | shift_se(king_bb),
        Color::Black => shift_nw(king_bb) | shift_ne(king_bb),
    } & board.pieces(enemy, Piece::Pawn);

    let knight_checkers = tables.knight[king_sq.index() as usize] & board.pieces(enemy, Piece::Knight);

    let rook_rays = tables.rook.get_attacks(king_sq, occ);
    let bishop_rays = tables.bishop.get_attacks(king_sq, occ);
    let slider_checkers = (rook_rays & (board.pieces(enemy, Piece::Rook) | board.pieces(enemy, Piece::Queen)))
        | (bishop_rays & (board.pieces(enemy, Piece::Bishop) | board.pieces(enemy, Piece::Queen)));

    pawn_checkers | knight_checkers | slider_checkers
}

/// Checkers against the side to move's own king.
pub fn checkers(board: &Board, tables: &AttackTables) -> BitBoard {
    checkers_of(board, board.side_to_move, tables)
}

pub fn in_check(board: &Board, color: Color, tables: &AttackTables) -> bool {
    checkers_of(board, color, tables) != 0
}

fn same_rank_or_file(a: Square, b: Square) -> bool {
    a.row() == b.row() || a.file() == b.file()
}

fn same_diagonal(a: Square, b: Square) -> bool {
    let dr = b.row() as i32 - a.row() as i32;
    let df = b.file() as i32 - a.file() as i32;
    dr.abs() == df.abs()
}

/// For every square, the set of destinations a piece standing there is
/// restricted to if it is pinned to the side-to-move's king; `FULL`
/// (unrestricted) otherwise. §4.C/§9: a square counts as pinned only when
/// exactly one blocker lies between the king and an aligned enemy slider,
/// *and* that blocker is our own piece (the source's bug of allowing an
/// enemy blocker to "pin" is corrected here per the spec's design note).
pub fn pinned_lines(board: &Board, tables: &AttackTables) -> [BitBoard; 64] {
    let mut lines = [FULL; 64];
    let side = board.side_to_move;
    let enemy = side.opposite();
    let king_sq = board.king_square(side);
    let occ_all = board.occupied();
    let own_occ = board.occupancy(side);

    let mut mark_if_pinned = |slider_sq: Square| {
        let between_mask = between(king_sq, slider_sq);
        let blockers = between_mask & occ_all;
        if blockers.count_ones() == 1 && (blockers & own_occ) != 0 {
            let blocker_sq = blockers.trailing_zeros() as usize;
            lines[blocker_sq] = between_mask | (1u64 << slider_sq.index());
        }
    };

    for sq in (board.pieces(enemy, Piece::Rook) | board.pieces(enemy, Piece::Queen)).bits() {
        if same_rank_or_file(king_sq, sq) {
            mark_if_pinned(sq);
        }
    }
    for sq in (board.pieces(enemy, Piece::Bishop) | board.pieces(enemy, Piece::Queen)).bits() {
        if same_diagonal(king_sq, sq) {
            mark_if_pinned(sq);
        }
    }

    lines
}

/// Union of squares attacked by the side NOT to move, with the side-to-move's
/// own king removed from occupancy first — so a slider "sees through" the
/// king it is currently attacking, correctly forbidding the king from
/// stepping one further square back along the same ray (§4.C).
pub fn attacked_by_opponent(board: &Board, tables: &AttackTables) -> BitBoard {
    let side = board.side_to_move;
    let enemy = side.opposite();
    let occ = board.occupied() & !board.pieces(side, Piece::King);

    let mut attacked: BitBoard = 0;

    let enemy_pawns = board.pieces(enemy, Piece::Pawn);
    attacked |= match enemy {
        Color::White => shift_ne(enemy_pawns) | shift_nw(enemy_pawns),
        Color::Black => shift_se(enemy_pawns) | shift_sw(enemy_pawns),
    };

    for sq in board.pieces(enemy, Piece::Knight).bits() {
        attacked |= tables.knight[sq.index() as usize];
    }
    for sq in board.pieces(enemy, Piece::King).bits() {
        attacked |= tables.king[sq.index() as usize];
    }
    for sq in (board.pieces(enemy, Piece::Bishop) | board.pieces(enemy, Piece::Queen)).bits() {
        attacked |= tables.bishop.get_attacks(sq, occ);
    }
    for sq in (board.pieces(enemy, Piece::Rook) | board.pieces(enemy, Piece::Queen)).bits() {
        attacked |= tables.rook.get_attacks(sq, occ);
    }

    attacked
}

/// Whether `square` is attacked by any piece of color `attacker`, using
/// actual board occupancy (no king removal). Used for the castling-transit
/// check, where every intermediate square must individually be safe.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color, tables: &AttackTables) -> bool {
    let target = 1u64 << square.index();

    let pawn_attackers = match attacker {
        Color::White => shift_sw(target) | shift_se(target),
        Color::Black => shift_nw(target) | shift_ne(target),
    };
    if pawn_attackers & board.pieces(attacker, Piece::Pawn) != 0 {
        return true;
    }
    if tables.knight[square.index() as usize] & board.pieces(attacker, Piece::Knight) != 0 {
        return true;
    }
    if tables.king[square.index() as usize] & board.pieces(attacker, Piece::King) != 0 {
        return true;
    }

    let occ = board.occupied();
    let rook_rays = tables.rook.get_attacks(square, occ);
    if rook_rays & (board.pieces(attacker, Piece::Rook) | board.pieces(attacker, Piece::Queen)) != 0 {
        return true;
    }
    let bishop_rays = tables.bishop.get_attacks(square, occ);
    if bishop_rays & (board.pieces(attacker, Piece::Bishop) | board.pieces(attacker, Piece::Queen)) != 0 {
        return true;
    }
    false
}
