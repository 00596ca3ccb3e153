//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayAction, handle_line, parse_path, run_play, score_words};
pub use solve::{SolveConfig, SolveResult, SolvedWord, solve_puzzle};
