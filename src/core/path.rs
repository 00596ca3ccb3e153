//! Simple paths over the grid
//!
//! A path is an ordered sequence of distinct positions where each step is
//! adjacent to the previous one. Used for player tile selection and for
//! witness paths reported by the solver.

use super::adjacency::is_adjacent;
use super::grid::{GRID_CELLS, Grid};
use std::fmt;

/// A simple path of grid positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    indices: Vec<usize>,
    visited: u16,
}

/// Error type for illegal path extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    OutOfRange(usize),
    AlreadyUsed(usize),
    NotAdjacent { from: usize, to: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(i) => {
                write!(f, "Position {i} is outside the grid (0-{})", GRID_CELLS - 1)
            }
            Self::AlreadyUsed(i) => write!(f, "Position {i} is already on the path"),
            Self::NotAdjacent { from, to } => {
                write!(f, "Position {to} is not adjacent to {from}")
            }
        }
    }
}

impl std::error::Error for PathError {}

impl Path {
    /// Create an empty path
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
            visited: 0,
        }
    }

    /// Build a path from a sequence of positions
    ///
    /// # Errors
    /// Returns the first `PathError` encountered while extending.
    ///
    /// # Examples
    /// ```
    /// use word_hunt::core::Path;
    ///
    /// assert!(Path::from_indices([0, 1, 5]).is_ok());
    /// assert!(Path::from_indices([0, 2]).is_err());
    /// ```
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Result<Self, PathError> {
        let mut path = Self::new();
        for index in indices {
            path.push(index)?;
        }
        Ok(path)
    }

    /// Extend the path by one position
    ///
    /// # Errors
    /// Fails if the position is off the grid, already used, or not adjacent to
    /// the current end of the path. The path is unchanged on error.
    pub fn push(&mut self, index: usize) -> Result<(), PathError> {
        if index >= GRID_CELLS {
            return Err(PathError::OutOfRange(index));
        }
        if self.contains(index) {
            return Err(PathError::AlreadyUsed(index));
        }
        if let Some(&last) = self.indices.last() {
            if !is_adjacent(last, index) {
                return Err(PathError::NotAdjacent {
                    from: last,
                    to: index,
                });
            }
        }

        self.indices.push(index);
        self.visited |= 1 << index;
        Ok(())
    }

    /// Remove the last position, if any
    pub fn pop(&mut self) -> Option<usize> {
        let index = self.indices.pop()?;
        self.visited &= !(1 << index);
        Some(index)
    }

    /// Check whether a position is already on the path
    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index < GRID_CELLS && self.visited & (1 << index) != 0
    }

    /// Positions in traversal order
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Concatenate the letters of the tiles along the path
    #[must_use]
    pub fn spell(&self, grid: &Grid) -> String {
        let mut word = String::with_capacity(self.indices.len() + 2);
        for &i in &self.indices {
            grid[i].push_onto(&mut word);
        }
        word
    }

    pub fn clear(&mut self) {
        self.indices.clear();
        self.visited = 0;
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.indices.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("→"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        "c a x x / t s x x / x x x x / x x qu i".parse().unwrap()
    }

    #[test]
    fn push_valid_steps() {
        let mut path = Path::new();
        path.push(0).unwrap();
        path.push(1).unwrap();
        path.push(4).unwrap();
        assert_eq!(path.indices(), &[0, 1, 4]);
        assert_eq!(path.len(), 3);
        assert!(path.contains(1));
        assert!(!path.contains(2));
    }

    #[test]
    fn push_rejects_reuse() {
        let mut path = Path::from_indices([0, 1]).unwrap();
        assert_eq!(path.push(0), Err(PathError::AlreadyUsed(0)));
        assert_eq!(path.indices(), &[0, 1]);
    }

    #[test]
    fn push_rejects_non_adjacent() {
        let mut path = Path::from_indices([3]).unwrap();
        assert_eq!(path.push(4), Err(PathError::NotAdjacent { from: 3, to: 4 }));
    }

    #[test]
    fn push_rejects_out_of_range() {
        let mut path = Path::new();
        assert_eq!(path.push(16), Err(PathError::OutOfRange(16)));
        assert!(path.is_empty());
    }

    #[test]
    fn pop_frees_position() {
        let mut path = Path::from_indices([0, 1, 5]).unwrap();
        assert_eq!(path.pop(), Some(5));
        assert!(!path.contains(5));
        path.push(5).unwrap();
        assert_eq!(path.indices(), &[0, 1, 5]);
    }

    #[test]
    fn spell_follows_tiles() {
        let grid = grid();
        let path = Path::from_indices([0, 1, 4, 5]).unwrap();
        assert_eq!(path.spell(&grid), "cats");
    }

    #[test]
    fn spell_expands_qu() {
        let grid = grid();
        let path = Path::from_indices([14, 15]).unwrap();
        assert_eq!(path.spell(&grid), "qui");
    }

    #[test]
    fn clear_resets() {
        let mut path = Path::from_indices([0, 1]).unwrap();
        path.clear();
        assert!(path.is_empty());
        assert!(path.push(15).is_ok());
    }

    #[test]
    fn display_lists_positions() {
        let path = Path::from_indices([0, 5, 10]).unwrap();
        assert_eq!(path.to_string(), "0→5→10");
    }
}
