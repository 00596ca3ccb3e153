//! Display functions for command results

use super::formatters::{create_progress_bar, grid_rows, path_letters};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Grid, Path};
use crate::puzzle::Puzzle;
use crate::scoring::{Session, Submission, SubmissionStatus};
use colored::Colorize;

/// Print the grid, highlighting an optional path
pub fn print_grid(grid: &Grid, highlight: Option<&Path>) {
    for row in grid_rows(grid, highlight) {
        println!("   {}", row.bright_white().bold());
    }
}

/// Print a puzzle header followed by its grid
pub fn print_puzzle(puzzle: &Puzzle) {
    println!("\n{}", "═".repeat(40).cyan());
    if puzzle.id().is_empty() {
        println!(" {}", "CUSTOM GRID".bright_cyan().bold());
    } else {
        println!(
            " {} {}  {}",
            "PUZZLE".bright_cyan().bold(),
            puzzle.id().bright_yellow().bold(),
            format!("(seed {})", puzzle.seed()).bright_black()
        );
    }
    println!("{}\n", "═".repeat(40).cyan());
    print_grid(puzzle.grid(), None);
    println!();
}

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Words: {}   Max score: {}",
        result.total_words.to_string().bright_yellow().bold(),
        result.max_score.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut current_len = 0;
    for solved in &result.words {
        if solved.word.len() != current_len {
            current_len = solved.word.len();
            println!("\n{}", format!("{current_len} letters").bright_cyan().bold());
        }

        match &solved.path {
            Some(path) => println!(
                "  {:<16} +{}  {}",
                solved.word.to_uppercase(),
                solved.points,
                path_letters(&result.grid, path).bright_black()
            ),
            None => println!("  {:<16} +{}", solved.word.to_uppercase(), solved.points),
        }
    }

    if result.words.len() < result.total_words {
        println!(
            "\n  … and {} more",
            result.total_words - result.words.len()
        );
    }

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    let most = result.length_distribution.values().copied().max().unwrap_or(0);
    for (&len, &count) in &result.length_distribution {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {len:2}: {} {count:4}", bar.green());
    }

    println!(
        "\n   Searched {} nodes in {:.2}ms",
        result.nodes_visited,
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print the outcome of one submission
pub fn print_submission(submission: &Submission) {
    let word = submission.word.to_uppercase();
    let line = match submission.status {
        SubmissionStatus::New => format!("✅ {word} +{}", submission.delta).green(),
        SubmissionStatus::Duplicate => format!("🔁 {word} already found ({})", submission.delta).yellow(),
        SubmissionStatus::Invalid => format!("❌ {word} not valid here ({})", submission.delta).red(),
    };
    println!("{line}   score {}", submission.score.to_string().bold());
}

/// Print the end-of-game summary with any words left unfound
pub fn print_play_summary(session: &Session) {
    let puzzle = session.puzzle();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  Final score: {} / {}",
        session.score().to_string().bright_yellow().bold(),
        puzzle.max_score()
    );
    println!(
        "  Words found: {} / {}",
        session.found().len(),
        puzzle.solution().len()
    );

    let remaining = session.remaining();
    if !remaining.is_empty() {
        println!("\n  Missed:");
        for chunk in remaining.chunks(8) {
            let line: Vec<String> = chunk.iter().map(|w| w.to_uppercase()).collect();
            println!("    {}", line.join("  ").bright_black());
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a batch of scored words
pub fn print_check_result(submissions: &[Submission], score: u32) {
    for submission in submissions {
        print_submission(submission);
    }
    println!("\nFinal score: {}", score.to_string().bright_yellow().bold());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Grids solved:     {}", result.total_grids);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Grids/second:     {}",
        format!("{:.1}", result.grids_per_second).bright_yellow().bold()
    );
    println!("   Avg nodes/grid:   {:.1}", result.average_nodes);

    println!("\n🔤 {}", "Solutions:".bright_cyan().bold());
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!("   Fewest words:     {}", format!("{}", result.min_words).yellow());
    println!("   Most words:       {}", format!("{}", result.max_words).green());
    if let Some(seed) = result.richest_seed {
        println!("   Richest seed:     {seed}");
    }
    println!("   Empty grids:      {}", result.empty_grids);
    println!("   Qu tiles:         {}", result.qu_tiles);

    println!("\n📈 {}", "Words per grid:".bright_cyan().bold());
    let mut buckets: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&words, &count)| (words, count))
        .collect();
    buckets.sort_unstable();
    for (words, count) in buckets.into_iter().take(20) {
        let pct = (count as f64 / result.total_grids as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {words:4}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
