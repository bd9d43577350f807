//! Move representation and legal move generation (§4.D).
//!
//! `movegen` is the only entry point the rest of the engine needs; the
//! other submodules (`attacks`, `magic`, `square_control`) exist to support
//! it and are exposed for direct use by the search and perft code too.

pub mod attacks;
pub mod magic;
pub mod movegen;
pub mod perft;
pub mod square_control;
pub mod types;

pub use movegen::generate_legal_moves;
pub use types::{Move, MoveList};
