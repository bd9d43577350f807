pub mod attacks;
pub mod search;
pub mod structs;

pub use structs::{AttackTables, MagicEntry, SliderTables};
