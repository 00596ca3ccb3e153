//! Word Hunt - CLI
//!
//! Show, solve and play the daily word-hunt grid.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use word_hunt::{
    commands::{
        BenchmarkConfig, SolveConfig, run_benchmark, run_play, score_words, solve_puzzle,
    },
    core::Grid,
    dictionary::{DictionaryIndex, loader},
    output::{print_benchmark_result, print_check_result, print_puzzle, print_solve_result},
    puzzle::{Puzzle, puzzle_id_for_date},
};

#[derive(Parser)]
#[command(
    name = "word_hunt",
    about = "Daily 4x4 word-hunt: deterministic grid generation and exhaustive solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle identifier, e.g. 2024-01-15-v1
    #[arg(long, global = true, conflicts_with = "date")]
    id: Option<String>,

    /// Puzzle date (YYYY-MM-DD); the identifier becomes DATE-v1
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Explicit layout instead of a generated grid, e.g. "c a t s / ..."
    #[arg(short, long, global = true, conflicts_with_all = ["id", "date"])]
    grid: Option<String>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// Print the puzzle grid
    Show,

    /// List every word on the grid
    Solve {
        /// Search start positions in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Only list the first N words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show a tile path for each word
        #[arg(long)]
        paths: bool,
    },

    /// Score a list of words in order
    Check {
        /// Words to submit
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Benchmark grid generation and solving
    Benchmark {
        /// Number of grids to solve
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Use random seeds instead of 0..N
        #[arg(short, long)]
        random: bool,

        /// Solve grids in parallel
        #[arg(short, long)]
        parallel: bool,
    },
}

/// Load the dictionary selected by the -w flag
///
/// A file that cannot be read degrades to an empty dictionary.
fn load_dictionary(wordlist: &str) -> DictionaryIndex {
    match wordlist {
        "embedded" => loader::embedded_index(),
        path => loader::load_or_empty(path),
    }
}

/// Build the puzzle selected by --grid, --id or --date
fn resolve_puzzle(cli: &Cli, dictionary: Arc<DictionaryIndex>) -> Result<Puzzle> {
    let puzzle = if let Some(layout) = &cli.grid {
        let grid: Grid = layout.parse()?;
        Puzzle::from_grid(grid, dictionary)
    } else if let Some(id) = &cli.id {
        Puzzle::new(id.as_str(), dictionary)
    } else if let Some(date) = &cli.date {
        Puzzle::new(puzzle_id_for_date(date)?, dictionary)
    } else {
        bail!("Pick a puzzle with --date YYYY-MM-DD, --id ID or --grid LAYOUT");
    };

    puzzle.log_summary();
    Ok(puzzle)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();
    let dictionary = Arc::new(load_dictionary(&cli.wordlist));

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Benchmark {
            count,
            random,
            parallel,
        } => {
            run_benchmark_command(&dictionary, count, random, parallel);
            Ok(())
        }
        Commands::Play => {
            let puzzle = resolve_puzzle(&cli, dictionary)?;
            print_puzzle(&puzzle);
            run_play(&puzzle).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Show => {
            let puzzle = resolve_puzzle(&cli, dictionary)?;
            print_puzzle(&puzzle);
            Ok(())
        }
        Commands::Solve {
            parallel,
            limit,
            paths,
        } => {
            let puzzle = resolve_puzzle(&cli, dictionary)?;
            let config = SolveConfig {
                parallel,
                limit,
                with_paths: paths,
            };
            print_puzzle(&puzzle);
            print_solve_result(&solve_puzzle(&puzzle, &config));
            Ok(())
        }
        Commands::Check { words } => {
            let puzzle = resolve_puzzle(&cli, dictionary)?;
            let (submissions, score) = score_words(&puzzle, &words);
            print_check_result(&submissions, score);
            Ok(())
        }
    }
}

fn run_benchmark_command(dictionary: &DictionaryIndex, count: usize, random: bool, parallel: bool) {
    if random {
        println!("Solving {count} grids from random seeds...");
    } else {
        println!("Solving grids for seeds 0..{count}...");
    }

    let config = BenchmarkConfig {
        random,
        parallel,
        ..BenchmarkConfig::new(count)
    };
    let result = run_benchmark(dictionary, &config);
    print_benchmark_result(&result);
}
