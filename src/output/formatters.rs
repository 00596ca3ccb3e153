//! Formatting utilities for terminal output

use crate::core::{Grid, Path};

/// Width of one tile cell in the rendered grid
const CELL_WIDTH: usize = 4;

/// Render the grid as four text rows, optionally marking a path
///
/// Tiles on the path are wrapped in brackets.
#[must_use]
pub fn grid_rows(grid: &Grid, highlight: Option<&Path>) -> Vec<String> {
    grid.rows()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, tile)| {
                    let index = r * row.len() + c;
                    let label = if highlight.is_some_and(|p| p.contains(index)) {
                        format!("[{tile}]")
                    } else {
                        format!(" {tile} ")
                    };
                    format!("{label:<CELL_WIDTH$}")
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Spell out a path tile by tile, e.g. `C→A→T→S`
#[must_use]
pub fn path_letters(grid: &Grid, path: &Path) -> String {
    path.indices()
        .iter()
        .map(|&i| grid[i].to_string())
        .collect::<Vec<_>>()
        .join("→")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
