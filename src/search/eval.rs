//! Static evaluation (§4.G). Score is from White's perspective: positive
//! favors White. Four terms — material, mobility/attacks, castling
//! rights, and piece-square tables — summed and cached in the
//! transposition table.

use crate::bitboard::{self, BitboardExt};
use crate::board::castle_bits::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use crate::board::{Board, Color, Piece};
use crate::config;
use crate::context::EngineContext;
use crate::moves::attacks::attacks;
use crate::search::pst;
use crate::square::Square;

const NON_KING_PIECES: [Piece; 5] = [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];
const MOBILE_PIECES: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

fn material(board: &Board) -> i32 {
    let mut total = 0;
    for color in [Color::White, Color::Black] {
        let sign = color.sign();
        for piece in NON_KING_PIECES {
            let count = bitboard::count(board.pieces(color, piece)) as i32;
            total += count * config::piece_value_units(piece) * sign * config::PIECE_FACTOR;
        }
    }
    total
}

/// Mobility/attacks (§4.G.3): count of attacked opponent-occupied squares
/// per piece, weighted by piece value and `ATTACK_FACTOR`. Kings are
/// skipped; pawns use diagonal shifts rather than the slider lookup.
fn mobility(board: &Board, tables: &crate::moves::magic::AttackTables) -> i32 {
    let mut total = 0;
    let occ = board.occupied();
    for color in [Color::White, Color::Black] {
        let sign = color.sign();
        let opponent = board.opponent_occupancy(color);

        for piece in MOBILE_PIECES {
            for sq in board.pieces(color, piece).bits() {
                let hits = bitboard::count(attacks(sq, piece, occ, tables) & opponent) as i32;
                total += hits * config::piece_value_units(piece) * sign * config::ATTACK_FACTOR;
            }
        }

        let pawns = board.pieces(color, Piece::Pawn);
        let pawn_attacks = match color {
            Color::White => bitboard::shift_ne(pawns) | bitboard::shift_nw(pawns),
            Color::Black => bitboard::shift_se(pawns) | bitboard::shift_sw(pawns),
        };
        let hits = bitboard::count(pawn_attacks & opponent) as i32;
        total += hits * config::piece_value_units(Piece::Pawn) * sign * config::ATTACK_FACTOR;
    }
    total
}

/// Castling rights (§4.G.4): a small per-right bonus/penalty standing in
/// for "pieces developed."
fn castling_rights(board: &Board) -> i32 {
    let mut total = 0;
    if board.has_castling(CASTLE_WK) {
        total += config::CASTLING_RIGHT_VALUE;
    }
    if board.has_castling(CASTLE_WQ) {
        total += config::CASTLING_RIGHT_VALUE;
    }
    if board.has_castling(CASTLE_BK) {
        total -= config::CASTLING_RIGHT_VALUE;
    }
    if board.has_castling(CASTLE_BQ) {
        total -= config::CASTLING_RIGHT_VALUE;
    }
    total
}

/// PST (§4.G.5): White pieces are indexed mirrored (`63 - s`), Black
/// pieces indexed directly (`s`).
fn piece_square_tables(board: &Board) -> i32 {
    let mut total = 0;
    for index in 0u8..64 {
        if let Some((color, piece)) = board.piece_at(Square::from_index(index)) {
            let table = pst::table_for(piece);
            let value = match color {
                Color::White => table[63 - index as usize],
                Color::Black => table[index as usize],
            };
            total += value * color.sign();
        }
    }
    total
}

/// `evaluate(pos)` (§4.G). Probes the transposition table first and
/// returns the cached score if it was computed at `depth >= pos.depth`;
/// otherwise computes and stores the fresh score at `pos.depth`.
pub fn evaluate(board: &Board, ctx: &mut EngineContext) -> i32 {
    if board.pieces(Color::White, Piece::King) == bitboard::EMPTY {
        return -config::INF;
    }
    if board.pieces(Color::Black, Piece::King) == bitboard::EMPTY {
        return config::INF;
    }

    let key = ctx.zobrist.hash(board);
    let wanted_depth = board.depth.clamp(0, u8::MAX as i32) as u8;
    if let Some((score, depth)) = ctx.tt.probe(key) {
        if depth >= wanted_depth {
            return score;
        }
    }

    let score = material(board) + mobility(board, &ctx.attacks) + castling_rights(board) + piece_square_tables(board);
    ctx.tt.store(key, score, wanted_depth);
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn startpos_material_and_pst_contributions_are_zero() {
        let board = Board::new();
        let mut ctx = EngineContext::for_tests();
        assert_eq!(evaluate(&board, &mut ctx), 0);
    }

    #[test]
    fn white_up_a_pawn_scores_positive() {
        let board = Board::from_str("rnbqkbnr/1ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        let mut ctx = EngineContext::for_tests();
        assert!(evaluate(&board, &mut ctx) > 0);
    }

    #[test]
    fn evaluation_is_antisymmetric_under_color_and_rank_mirror() {
        let white_up =
            Board::from_str("rnbqkbnr/ppppp1pp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        // Same material deficit, mirrored onto Black to move, ranks flipped.
        let black_up =
            Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPP1PP/RNBQKBNR b KQkq - 0 1").unwrap();
        let mut ctx = EngineContext::for_tests();
        assert_eq!(evaluate(&white_up, &mut ctx), -evaluate(&black_up, &mut ctx));
    }

    #[test]
    fn losing_a_castling_right_costs_the_losing_side() {
        let both = Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        let white_lost_kingside =
            Board::from_str("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Qkq - 0 1").unwrap();
        let mut ctx = EngineContext::for_tests();
        assert!(evaluate(&both, &mut ctx) > evaluate(&white_lost_kingside, &mut ctx));
    }

    #[test]
    fn terminal_shortcut_returns_infinity_when_a_king_is_missing() {
        let board = Board::from_str("8/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let mut ctx = EngineContext::for_tests();
        assert_eq!(evaluate(&board, &mut ctx), config::INF);
    }
}
