//! Error kinds crossing a file or user-input boundary (§7). Internal
//! invariant violations are bugs, not these; they stay as `debug_assert!`s
//! or panics close to where they would happen, not wrapped in `Result`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidFen(String),
    IllegalMove(String),
    SeedFileMalformed(String),
    TranspositionFileMalformed(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidFen(reason) => write!(f, "invalid FEN: {reason}"),
            EngineError::IllegalMove(mv) => write!(f, "illegal move: {mv}"),
            EngineError::SeedFileMalformed(reason) => write!(f, "malformed zobrist seed file: {reason}"),
            EngineError::TranspositionFileMalformed(reason) => {
                write!(f, "malformed transposition file: {reason}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
