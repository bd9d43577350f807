//! Static evaluation, move ordering, the transposition table, and the
//! alpha-beta / iterative-deepening search that ties them together
//! (§4.F, §4.G, §4.H).

pub mod eval;
pub mod ordering;
pub mod pst;
pub mod search;
pub mod tt;

pub use search::{best_move, minimax};
