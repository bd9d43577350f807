//! Transposition table (§4.F): a separate-chaining hash map from Zobrist
//! key to `{score, depth}`, plus the §6 binary persistence format.
//!
//! Per the Design Note in §9 ("the simplest correct choice, matches the
//! earliest evolutionary draft of the donor's on-disk dictionary"), each
//! bucket is a small `Vec<TTEntry>` searched linearly for a matching key
//! rather than an open-addressed scheme.

use crate::errors::EngineError;
use std::fs;
use std::io::Write as _;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub score: i32,
    pub depth: u8,
}

/// One 13-byte on-disk record: `u64 key, i32 score, u8 depth`, no padding
/// (§6). Host byte order, matching the spec's own on-disk layout.
const RECORD_SIZE: usize = 13;

pub struct TranspositionTable {
    buckets: Vec<Vec<TTEntry>>,
}

impl TranspositionTable {
    pub fn new(bucket_count: usize) -> Self {
        TranspositionTable {
            buckets: vec![Vec::new(); bucket_count.max(1)],
        }
    }

    #[inline]
    fn bucket_index(&self, key: u64) -> usize {
        (key % self.buckets.len() as u64) as usize
    }

    /// `probe(key) -> {score, depth} | none` (§4.F). Probe semantics — a
    /// cached entry is only *usable* against a given search depth — are a
    /// caller concern (§4.H step 2); this just returns whatever is stored.
    pub fn probe(&self, key: u64) -> Option<(i32, u8)> {
        let bucket = &self.buckets[self.bucket_index(key)];
        bucket.iter().find(|e| e.key == key).map(|e| (e.score, e.depth))
    }

    /// `store(key, score, depth)`: overwrite unconditionally (§4.F — the
    /// spec explicitly does not gate stores by depth).
    pub fn store(&mut self, key: u64, score: i32, depth: u8) {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        match bucket.iter_mut().find(|e| e.key == key) {
            Some(existing) => {
                existing.score = score;
                existing.depth = depth;
            }
            None => bucket.push(TTEntry { key, score, depth }),
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads `path` if present, re-inserting every on-disk record in file
    /// order (later duplicates overwrite earlier ones, per §4.F). A
    /// missing or malformed file yields an empty table (§7:
    /// `TranspositionFileMissing / Malformed` -> proceed with empty table).
    pub fn load_or_empty(path: impl AsRef<Path>, bucket_count: usize) -> Self {
        let mut table = TranspositionTable::new(bucket_count);
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => {
                if let Err(reason) = table.load_records(&bytes) {
                    tracing::warn!(?path, %reason, "transposition file malformed, starting empty");
                    return TranspositionTable::new(bucket_count);
                }
            }
            Err(_) => {
                tracing::info!(?path, "no transposition file found, starting empty");
            }
        }
        table
    }

    fn load_records(&mut self, bytes: &[u8]) -> Result<(), EngineError> {
        if bytes.len() % RECORD_SIZE != 0 {
            return Err(EngineError::TranspositionFileMalformed(format!(
                "length {} is not a multiple of the {RECORD_SIZE}-byte record size",
                bytes.len()
            )));
        }
        for chunk in bytes.chunks_exact(RECORD_SIZE) {
            let key = u64::from_ne_bytes(chunk[0..8].try_into().unwrap());
            let score = i32::from_ne_bytes(chunk[8..12].try_into().unwrap());
            let depth = chunk[12];
            self.store(key, score, depth);
        }
        Ok(())
    }

    /// Writes every entry to `path` as flat 13-byte records (§4.F, §6).
    /// Called at clean shutdown; I/O failures are logged, not propagated,
    /// per §7's "the engine does not abort on missing persistence files."
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut bytes = Vec::with_capacity(self.len() * RECORD_SIZE);
        for bucket in &self.buckets {
            for entry in bucket {
                bytes.extend_from_slice(&entry.key.to_ne_bytes());
                bytes.extend_from_slice(&entry.score.to_ne_bytes());
                bytes.push(entry.depth);
            }
        }
        match fs::File::create(path) {
            Ok(mut file) => {
                if let Err(err) = file.write_all(&bytes) {
                    tracing::warn!(?path, %err, "failed to write transposition file");
                }
            }
            Err(err) => tracing::warn!(?path, %err, "failed to create transposition file"),
        }
    }
}
