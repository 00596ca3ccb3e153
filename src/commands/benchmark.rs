//! Benchmark command
//!
//! Generates and solves many grids, reporting solver throughput and solution
//! statistics.

use crate::core::{Grid, Tile};
use crate::dictionary::DictionaryIndex;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of grids to generate and solve
    pub count: usize,
    /// Draw seeds at random instead of using `0..count`
    pub random: bool,
    /// Solve grids concurrently on the rayon pool
    pub parallel: bool,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            random: false,
            parallel: false,
            show_progress: true,
        }
    }
}

/// Per-grid measurement
struct GridSample {
    seed: u32,
    words: usize,
    nodes: usize,
    qu_tiles: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_grids: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Seed of the grid with the most words
    pub richest_seed: Option<u32>,
    /// Grids with no words at all
    pub empty_grids: usize,
    pub average_nodes: f64,
    pub qu_tiles: usize,
    /// Grid count keyed by number of words found
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub grids_per_second: f64,
}

/// Run the benchmark against a dictionary
pub fn run_benchmark(index: &DictionaryIndex, config: &BenchmarkConfig) -> BenchmarkResult {
    let seeds: Vec<u32> = if config.random {
        (0..config.count).map(|_| rand::random()).collect()
    } else {
        (0..config.count).map(|i| i as u32).collect()
    };

    let pb = if config.show_progress {
        ProgressBar::new(seeds.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let solver = Solver::new(index);
    let measure = |&seed: &u32| {
        let grid = Grid::generate(seed);
        let report = solver.solve_with_stats(&grid, false);
        pb.inc(1);
        GridSample {
            seed,
            words: report.words.len(),
            nodes: report.nodes_visited,
            qu_tiles: grid.tiles().iter().filter(|&&t| t == Tile::Qu).count(),
        }
    };

    let start = Instant::now();
    let samples: Vec<GridSample> = if config.parallel {
        seeds.par_iter().map(measure).collect()
    } else {
        seeds.iter().map(measure).collect()
    };
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let result = summarize(&samples, duration);
    info!(
        "benchmark: {} grids in {:?} ({:.1} grids/s)",
        result.total_grids, result.duration, result.grids_per_second
    );
    result
}

fn summarize(samples: &[GridSample], duration: Duration) -> BenchmarkResult {
    let total_grids = samples.len();
    let total_words: usize = samples.iter().map(|s| s.words).sum();
    let total_nodes: usize = samples.iter().map(|s| s.nodes).sum();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for sample in samples {
        *distribution.entry(sample.words).or_insert(0) += 1;
    }

    // First grid wins ties so the report is stable for fixed seeds
    let richest = samples
        .iter()
        .rev()
        .max_by_key(|s| s.words);

    let per_grid = |total: usize| {
        if total_grids == 0 {
            0.0
        } else {
            total as f64 / total_grids as f64
        }
    };

    BenchmarkResult {
        total_grids,
        total_words,
        average_words: per_grid(total_words),
        min_words: samples.iter().map(|s| s.words).min().unwrap_or(0),
        max_words: samples.iter().map(|s| s.words).max().unwrap_or(0),
        richest_seed: richest.map(|s| s.seed),
        empty_grids: samples.iter().filter(|s| s.words == 0).count(),
        average_nodes: per_grid(total_nodes),
        qu_tiles: samples.iter().map(|s| s.qu_tiles).sum(),
        distribution,
        duration,
        grids_per_second: total_grids as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
