//! Grid solving
//!
//! Exhaustive prefix-pruned search producing the canonical solution set, plus
//! witness paths for individual words.

mod engine;
mod witness;

pub use engine::{SolveReport, Solver, solve, sort_solution};
pub use witness::find_path;
