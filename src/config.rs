//! Engine tuning constants (§4.G, §4.H, §6). Grouped here rather than
//! scattered `const`s in each module, and rather than read from the
//! environment at runtime — the donor has no env-based config layer, and
//! there is nothing here a user needs to override at process start.

/// Centipawn-ish scale factor applied to material counts (§4.G.2).
pub const PIECE_FACTOR: i32 = 100;

/// Scale factor applied to the mobility/attack-count term (§4.G.3).
pub const ATTACK_FACTOR: i32 = 3;

/// Per-piece-type value in "pawns" before `PIECE_FACTOR` scaling.
pub fn piece_value_units(piece: crate::board::Piece) -> i32 {
    use crate::board::Piece::*;
    match piece {
        Pawn => 1,
        Knight => 3,
        Bishop => 3,
        Rook => 5,
        Queen => 9,
        King => 0,
    }
}

/// Penalty subtracted per lost castling-right bit on a side's back rank
/// (§4.G.4). A bonus of the same magnitude accrues to the side retaining it.
pub const CASTLING_RIGHT_VALUE: i32 = 25;

/// Sentinel used in place of `i32::MIN`/`MAX` for mate scores, so that
/// negating a bound never overflows (§4.G, "Numeric semantics").
pub const INF: i32 = i32::MAX / 2;

/// Default number of plies iterative deepening advances the frontier by
/// between iterations (§4.H, "source default 2; callers may pass 1").
pub const DEFAULT_DEPTH_STEP: i32 = 2;

/// Default bucket count for the transposition table's separate-chaining
/// hash map (§9: "separate-chaining with a collision list per bucket is
/// the simplest correct choice").
pub const DEFAULT_TT_BUCKETS: usize = 1 << 20;

/// Default on-disk path for the Zobrist seed file (§6).
pub const DEFAULT_ZOBRIST_SEED_PATH: &str = "zobrist.dat";

/// Default on-disk path for the transposition table file (§6).
pub const DEFAULT_TT_PATH: &str = "heuristicDict.dat";

/// Maximum legal moves in any reachable position is 218; 256 leaves
/// headroom without meaningfully changing the scratch-buffer's size (§5).
pub const MAX_MOVES: usize = 256;

/// Seed for the magic-number trial search at attack-table build time
/// (§4.B: "found at process startup by randomized trial search"). Fixed
/// rather than drawn from entropy so attack-table construction is
/// reproducible across runs and in tests.
pub const MAGIC_SEARCH_SEED: u64 = 0xC0FFEE;
