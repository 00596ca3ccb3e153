//! Exhaustive grid solver
//!
//! Depth-first search from every start position over simple paths, pruned by
//! the dictionary prefix set. The visited set is a 16-bit mask copied into each
//! recursive call.

use crate::core::{GRID_CELLS, Grid, NEIGHBOR_MASKS};
use crate::dictionary::{DictionaryIndex, MIN_WORD_LEN};
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::time::{Duration, Instant};

/// Result of a solve with search statistics
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Solution set, sorted by [`sort_solution`]
    pub words: Vec<String>,
    /// Search nodes that passed the prefix check
    pub nodes_visited: usize,
    pub duration: Duration,
}

/// Per-start search state: one accumulator, one word buffer
struct Search<'a> {
    grid: &'a Grid,
    index: &'a DictionaryIndex,
    found: FxHashSet<String>,
    word: String,
    nodes: usize,
}

impl<'a> Search<'a> {
    fn new(grid: &'a Grid, index: &'a DictionaryIndex) -> Self {
        Self {
            grid,
            index,
            found: FxHashSet::default(),
            word: String::with_capacity(2 * GRID_CELLS),
            nodes: 0,
        }
    }

    fn run_from(mut self, start: usize) -> Self {
        self.visit(start, 0);
        self
    }

    fn visit(&mut self, position: usize, visited: u16) {
        let restore = self.word.len();
        self.grid[position].push_onto(&mut self.word);

        if self.index.contains_prefix(&self.word) {
            self.nodes += 1;

            if self.word.len() >= MIN_WORD_LEN
                && self.index.contains_word(&self.word)
                && !self.found.contains(&self.word)
            {
                trace!("found {} ending at {position}", self.word);
                self.found.insert(self.word.clone());
            }

            let visited = visited | (1 << position);
            let mut candidates = NEIGHBOR_MASKS[position] & !visited;
            while candidates != 0 {
                let next = candidates.trailing_zeros() as usize;
                candidates &= candidates - 1;
                self.visit(next, visited);
            }
        }

        self.word.truncate(restore);
    }
}

/// Grid solver over a borrowed dictionary index
///
/// The index is shared read-only; any number of solves (sequential or
/// parallel) may borrow it at once.
pub struct Solver<'a> {
    index: &'a DictionaryIndex,
}

impl<'a> Solver<'a> {
    /// Create a solver over a dictionary index
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex) -> Self {
        Self { index }
    }

    /// The dictionary this solver searches against
    #[must_use]
    pub const fn index(&self) -> &'a DictionaryIndex {
        self.index
    }

    /// Find every dictionary word traceable on the grid
    ///
    /// Returns distinct words sorted by descending length, then alphabetically.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> Vec<String> {
        self.solve_with_stats(grid, false).words
    }

    /// Same result as [`Solver::solve`], one rayon task per start position
    #[must_use]
    pub fn solve_parallel(&self, grid: &Grid) -> Vec<String> {
        self.solve_with_stats(grid, true).words
    }

    /// Solve and report search statistics
    ///
    /// Per-start results are merged only after every start has finished, so
    /// output is identical with or without `parallel`.
    #[must_use]
    pub fn solve_with_stats(&self, grid: &Grid, parallel: bool) -> SolveReport {
        let start = Instant::now();

        let searches: Vec<Search> = if parallel {
            (0..GRID_CELLS)
                .into_par_iter()
                .map(|i| Search::new(grid, self.index).run_from(i))
                .collect()
        } else {
            (0..GRID_CELLS)
                .map(|i| Search::new(grid, self.index).run_from(i))
                .collect()
        };

        let mut nodes_visited = 0;
        let mut merged: FxHashSet<String> = FxHashSet::default();
        for search in searches {
            nodes_visited += search.nodes;
            merged.extend(search.found);
        }

        let mut words: Vec<String> = merged.into_iter().collect();
        sort_solution(&mut words);

        let duration = start.elapsed();
        debug!(
            "solved grid: {} words, {nodes_visited} nodes in {duration:?} (parallel: {parallel})",
            words.len()
        );

        SolveReport {
            words,
            nodes_visited,
            duration,
        }
    }
}

/// Solve a grid against a dictionary index
///
/// # Examples
/// ```
/// use word_hunt::core::Grid;
/// use word_hunt::dictionary::DictionaryIndex;
/// use word_hunt::solver::solve;
///
/// let grid: Grid = "c a x x / t s x x / x x x x / x x x x".parse().unwrap();
/// let index = DictionaryIndex::build("cat\ncats\nact\n");
/// assert_eq!(solve(&grid, &index), vec!["cats", "act", "cat"]);
/// ```
#[must_use]
pub fn solve(grid: &Grid, index: &DictionaryIndex) -> Vec<String> {
    Solver::new(index).solve(grid)
}

/// Order words by descending length, then ascending alphabetically
///
/// # Examples
/// ```
/// use word_hunt::solver::sort_solution;
///
/// let mut words = vec!["cat".to_string(), "cats".to_string(), "bat".to_string()];
/// sort_solution(&mut words);
/// assert_eq!(words, vec!["cats", "bat", "cat"]);
/// ```
pub fn sort_solution(words: &mut [String]) {
    words.sort_unstable_by(|a, b| (Reverse(a.len()), a).cmp(&(Reverse(b.len()), b)));
}
