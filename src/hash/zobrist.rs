//! Zobrist hashing (§4.E) and the on-disk seed-file format (§6).
//!
//! `ZobristKeys` is built once at process start — from the seed file if
//! one exists, otherwise from a fresh PRNG draw which is then persisted —
//! and threaded through the engine by reference as part of
//! [`crate::context::EngineContext`] rather than kept as a module-level
//! global (§3.1, §9: "Global singletons -> explicit context").

use crate::board::castle_bits::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use crate::board::{Board, Color, Piece};
use crate::errors::EngineError;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Random key tables (§3: "Zobrist table"). `piece_pos[square][code]` is
/// indexed by the 12-valued colored-piece code `piece*2 + color` (§3);
/// a 13th column is written to disk for byte-for-byte fidelity with the
/// spec's `piece[13]` layout (the reserved `EMPTY` slot) but is never read.
pub struct ZobristKeys {
    piece_pos: [[u64; 12]; 64],
    en_passant: [u64; 64],
    castling: [u64; 4],
    black_to_move: u64,
}

#[inline]
fn piece_code(color: Color, piece: Piece) -> usize {
    (piece as usize) * 2 + (color as usize)
}

impl ZobristKeys {
    /// Loads keys from `path` if present and well-formed; otherwise draws
    /// fresh random keys and writes them to `path` (§4.E). A malformed
    /// seed file is treated the same as a missing one: regenerate and
    /// warn, per §7's `SeedFileMalformed` handling.
    pub fn load_or_generate(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => match Self::parse(&text) {
                Ok(keys) => keys,
                Err(reason) => {
                    tracing::warn!(?path, %reason, "zobrist seed file malformed, regenerating");
                    Self::generate_and_save(path)
                }
            },
            Err(_) => {
                tracing::info!(?path, "no zobrist seed file found, generating one");
                Self::generate_and_save(path)
            }
        }
    }

    fn generate_and_save(path: &Path) -> Self {
        let keys = Self::random(StdRng::from_rng(&mut rand::rng()));
        if let Err(err) = fs::write(path, keys.serialize()) {
            tracing::warn!(?path, %err, "failed to persist zobrist seed file");
        }
        keys
    }

    /// Draws every key from `rng`. Exposed directly for tests that want a
    /// deterministic instance without touching the filesystem.
    pub fn random(mut rng: StdRng) -> Self {
        let mut piece_pos = [[0u64; 12]; 64];
        for sq in piece_pos.iter_mut() {
            for key in sq.iter_mut() {
                *key = rng.next_u64();
            }
        }
        let mut en_passant = [0u64; 64];
        for key in en_passant.iter_mut() {
            *key = rng.next_u64();
        }
        let mut castling = [0u64; 4];
        for key in castling.iter_mut() {
            *key = rng.next_u64();
        }
        ZobristKeys {
            piece_pos,
            en_passant,
            castling,
            black_to_move: rng.next_u64(),
        }
    }

    /// §6 on-disk format: block 1 is 64 lines of 13 space-separated
    /// decimal `u64`s — the `piecePos` table row-major by square. Block 2
    /// is one line of 64 en-passant keys, block 3 one line of 4 castling
    /// keys, block 4 one line holding `black_to_move`.
    fn serialize(&self) -> String {
        let mut out = String::new();
        for sq in 0..64 {
            for p in 0..12 {
                let _ = write!(out, "{} ", self.piece_pos[sq][p]);
            }
            let _ = writeln!(out, "0");
        }
        for sq in 0..64 {
            let _ = write!(out, "{} ", self.en_passant[sq]);
        }
        out.push('\n');
        for i in 0..4 {
            let _ = write!(out, "{} ", self.castling[i]);
        }
        out.push('\n');
        let _ = writeln!(out, "{}", self.black_to_move);
        out
    }

    fn parse(text: &str) -> Result<Self, EngineError> {
        let mut lines = text.lines();
        let malformed = |reason: &str| EngineError::SeedFileMalformed(reason.to_string());

        let mut piece_pos = [[0u64; 12]; 64];
        for row in piece_pos.iter_mut() {
            let line = lines.next().ok_or_else(|| malformed("truncated piece block"))?;
            let values: Vec<u64> = line
                .split_whitespace()
                .map(|t| t.parse::<u64>())
                .collect::<Result<_, _>>()
                .map_err(|_| malformed("non-numeric value in piece block"))?;
            if values.len() != 13 {
                return Err(malformed("piece-block row did not have 13 values"));
            }
            row.copy_from_slice(&values[..12]);
        }

        let ep_line = lines.next().ok_or_else(|| malformed("missing en-passant block"))?;
        let ep_values: Vec<u64> = ep_line
            .split_whitespace()
            .map(|t| t.parse::<u64>())
            .collect::<Result<_, _>>()
            .map_err(|_| malformed("non-numeric value in en-passant block"))?;
        if ep_values.len() != 64 {
            return Err(malformed("en-passant block did not have 64 values"));
        }
        let mut en_passant = [0u64; 64];
        en_passant.copy_from_slice(&ep_values);

        let castling_line = lines.next().ok_or_else(|| malformed("missing castling block"))?;
        let castling_values: Vec<u64> = castling_line
            .split_whitespace()
            .map(|t| t.parse::<u64>())
            .collect::<Result<_, _>>()
            .map_err(|_| malformed("non-numeric value in castling block"))?;
        if castling_values.len() != 4 {
            return Err(malformed("castling block did not have 4 values"));
        }
        let mut castling = [0u64; 4];
        castling.copy_from_slice(&castling_values);

        let btm_line = lines.next().ok_or_else(|| malformed("missing black-to-move block"))?;
        let black_to_move = btm_line
            .split_whitespace()
            .next()
            .ok_or_else(|| malformed("empty black-to-move block"))?
            .parse::<u64>()
            .map_err(|_| malformed("non-numeric black-to-move value"))?;

        Ok(ZobristKeys {
            piece_pos,
            en_passant,
            castling,
            black_to_move,
        })
    }

    /// `hash(pos)` (§4.E): XOR of every occupied square's piece key, the
    /// en-passant key if set, each held castling-right key, and
    /// `black_to_move` when Black is on the move.
    pub fn hash(&self, board: &Board) -> u64 {
        let mut key = 0u64;
        for sq in 0u8..64 {
            let square = crate::square::Square::from_index(sq);
            if let Some((color, piece)) = board.piece_at(square) {
                key ^= self.piece_pos[sq as usize][piece_code(color, piece)];
            }
        }
        if let Some(ep) = board.en_passant {
            key ^= self.en_passant[ep.index() as usize];
        }
        if board.has_castling(CASTLE_WK) {
            key ^= self.castling[0];
        }
        if board.has_castling(CASTLE_WQ) {
            key ^= self.castling[1];
        }
        if board.has_castling(CASTLE_BK) {
            key ^= self.castling[2];
        }
        if board.has_castling(CASTLE_BQ) {
            key ^= self.castling[3];
        }
        if board.side_to_move == Color::Black {
            key ^= self.black_to_move;
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn keys() -> ZobristKeys {
        ZobristKeys::random(StdRng::seed_from_u64(0xC0FFEE))
    }

    #[test]
    fn equal_positions_hash_equal() {
        let k = keys();
        let a = Board::new();
        let b = Board::new();
        assert_eq!(k.hash(&a), k.hash(&b));
    }

    #[test]
    fn a_single_move_changes_the_hash() {
        let k = keys();
        let board = Board::new();
        let h0 = k.hash(&board);
        let mv = crate::moves::types::Move {
            from: crate::square::Square::from_algebraic("e2").unwrap(),
            to: crate::square::Square::from_algebraic("e4").unwrap(),
            moved: Piece::Pawn,
        };
        let next = board.apply_move(mv);
        assert_ne!(h0, k.hash(&next));
    }

    #[test]
    fn serialize_then_parse_round_trips() {
        let k = keys();
        let text = k.serialize();
        let parsed = ZobristKeys::parse(&text).unwrap();
        let board = Board::from_str("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
        assert_eq!(k.hash(&board), parsed.hash(&board));
    }

    #[test]
    fn load_or_generate_creates_a_file_on_first_run() {
        let dir = std::env::temp_dir().join(format!("zobrist-test-{:x}", rand::random::<u64>()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("zobrist.dat");
        assert!(!path.exists());
        let first = ZobristKeys::load_or_generate(&path);
        assert!(path.exists());
        let second = ZobristKeys::load_or_generate(&path);
        let board = Board::new();
        assert_eq!(first.hash(&board), second.hash(&board));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
