//! The two pure attack-lookup functions exposed to the rest of the engine
//! (§4.B): `attacks` for non-pawn pieces and `between` for aligned-square
//! gaps. Pawn attacks are computed directly by callers via diagonal shifts
//! of the pawn bitboard, since direction depends on color and this
//! interface is color-agnostic.

use crate::bitboard::BitBoard;
use crate::board::Piece;
use crate::moves::magic::AttackTables;
use crate::square::Square;

pub use crate::moves::magic::attacks::between;

pub fn attacks(sq: Square, piece: Piece, occupancy: BitBoard, tables: &AttackTables) -> BitBoard {
    match piece {
        Piece::Knight => tables.knight[sq.index() as usize],
        Piece::King => tables.king[sq.index() as usize],
        Piece::Bishop => tables.bishop.get_attacks(sq, occupancy),
        Piece::Rook => tables.rook.get_attacks(sq, occupancy),
        Piece::Queen => tables.queen_attacks(sq, occupancy),
        Piece::Pawn => unreachable!("pawn attacks are computed directly, not via attacks()"),
    }
}
