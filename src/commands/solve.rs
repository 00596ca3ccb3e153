//! Puzzle solving command
//!
//! Solves a puzzle with statistics and optional witness paths.

use crate::core::{Grid, Path};
use crate::puzzle::Puzzle;
use crate::scoring::word_points;
use crate::solver::{Solver, find_path};
use std::collections::BTreeMap;
use std::time::Duration;

/// Configuration for solving a puzzle
pub struct SolveConfig {
    /// Search the 16 start positions on the rayon pool
    pub parallel: bool,
    /// Only report the first N words (longest first)
    pub limit: Option<usize>,
    /// Attach a witness path to each reported word
    pub with_paths: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parallel: false,
            limit: None,
            with_paths: false,
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One word of the solution
pub struct SolvedWord {
    pub word: String,
    pub points: i32,
    pub path: Option<Path>,
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub puzzle_id: String,
    pub seed: u32,
    pub grid: Grid,
    pub words: Vec<SolvedWord>,
    pub total_words: usize,
    pub max_score: u32,
    /// Word count per letter length
    pub length_distribution: BTreeMap<usize, usize>,
    pub nodes_visited: usize,
    pub duration: Duration,
}

/// Report a puzzle's solution with search statistics
///
/// Words come from the puzzle's stored solution. The grid is searched once
/// more only to time it and count visited nodes.
#[must_use]
pub fn solve_puzzle(puzzle: &Puzzle, config: &SolveConfig) -> SolveResult {
    let grid = *puzzle.grid();
    let report = Solver::new(puzzle.dictionary()).solve_with_stats(&grid, config.parallel);
    debug_assert_eq!(report.words, puzzle.solution());

    let mut length_distribution = BTreeMap::new();
    for word in puzzle.solution() {
        *length_distribution.entry(word.len()).or_insert(0) += 1;
    }

    let total_words = puzzle.solution().len();
    let words = puzzle
        .solution()
        .iter()
        .take(config.limit.unwrap_or(total_words))
        .map(|word| SolvedWord {
            points: word_points(word.len()),
            path: config.with_paths.then(|| find_path(&grid, word)).flatten(),
            word: word.clone(),
        })
        .collect();

    SolveResult {
        puzzle_id: puzzle.id().to_string(),
        seed: puzzle.seed(),
        grid,
        words,
        total_words,
        max_score: puzzle.max_score(),
        length_distribution,
        nodes_visited: report.nodes_visited,
        duration: report.duration,
    }
}
