//! Witness paths for individual words
//!
//! Finds one simple path spelling a given word, without consulting any
//! dictionary. Used to show how a word is traced and to cross-check the solver.

use crate::core::{GRID_CELLS, Grid, NEIGHBOR_MASKS, Path};

/// Find a path spelling `word`, if one exists
///
/// Search order is deterministic (ascending start, ascending neighbour), so
/// the same grid and word always yield the same witness.
///
/// # Examples
/// ```
/// use word_hunt::core::Grid;
/// use word_hunt::solver::find_path;
///
/// let grid: Grid = "c a x x / t s x x / x x x x / x x x x".parse().unwrap();
/// let path = find_path(&grid, "cats").unwrap();
/// assert_eq!(path.indices(), &[0, 1, 4, 5]);
/// assert!(find_path(&grid, "sax").is_some());
/// assert!(find_path(&grid, "dog").is_none());
/// ```
#[must_use]
pub fn find_path(grid: &Grid, word: &str) -> Option<Path> {
    if word.is_empty() {
        return None;
    }

    let mut trail = Vec::with_capacity(GRID_CELLS);
    (0..GRID_CELLS)
        .find(|&start| trace(grid, word, start, 0, &mut trail))
        .and_then(|_| Path::from_indices(trail).ok())
}

fn trace(grid: &Grid, rest: &str, position: usize, visited: u16, trail: &mut Vec<usize>) -> bool {
    let Some(rest) = rest.strip_prefix(grid[position].as_str()) else {
        return false;
    };

    trail.push(position);
    if rest.is_empty() {
        return true;
    }

    let visited = visited | (1 << position);
    let mut candidates = NEIGHBOR_MASKS[position] & !visited;
    while candidates != 0 {
        let next = candidates.trailing_zeros() as usize;
        candidates &= candidates - 1;
        if trace(grid, rest, next, visited, trail) {
            return true;
        }
    }

    trail.pop();
    false
}
