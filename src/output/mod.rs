//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_check_result, print_grid, print_play_summary, print_puzzle,
    print_solve_result, print_submission,
};
