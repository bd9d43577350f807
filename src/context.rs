//! The engine-wide state bundle (§3.1, §9: "Global singletons ->
//! explicit context"). `EngineContext` owns the three process-lifetime
//! objects — attack tables, Zobrist keys, and the transposition table —
//! and is built once at startup, then threaded through search and
//! evaluation by reference (mutably, for the table) instead of living
//! behind module-level statics. This keeps property tests able to build a
//! small, private `EngineContext` per test.

use crate::hash::zobrist::ZobristKeys;
use crate::moves::magic::AttackTables;
use crate::search::tt::TranspositionTable;

pub struct EngineContext {
    pub attacks: AttackTables,
    pub zobrist: ZobristKeys,
    pub tt: TranspositionTable,
}

impl EngineContext {
    /// Builds attack tables from scratch and loads (or generates) the
    /// Zobrist seeds and transposition table from the given paths.
    pub fn load(zobrist_seed_path: impl AsRef<std::path::Path>, tt_path: impl AsRef<std::path::Path>) -> Self {
        EngineContext {
            attacks: AttackTables::build(crate::config::MAGIC_SEARCH_SEED),
            zobrist: ZobristKeys::load_or_generate(zobrist_seed_path),
            tt: TranspositionTable::load_or_empty(tt_path, crate::config::DEFAULT_TT_BUCKETS),
        }
    }

    /// An in-memory-only context: fresh attack tables, freshly drawn (not
    /// persisted) Zobrist keys, and an empty transposition table. Used by
    /// unit and integration tests, and by any embedder that wants to run
    /// the engine without touching the filesystem.
    pub fn for_tests() -> Self {
        use rand::SeedableRng;
        EngineContext {
            attacks: AttackTables::build(crate::config::MAGIC_SEARCH_SEED),
            zobrist: ZobristKeys::random(rand::rngs::StdRng::seed_from_u64(0xC0FFEE)),
            tt: TranspositionTable::new(crate::config::DEFAULT_TT_BUCKETS),
        }
    }
}
