//! Daily puzzle assembly
//!
//! Ties an identifier to its seed, grid and solution set. The identifier is
//! opaque to everything except [`puzzle_id_for_date`], which only exists so
//! the CLI can build the canonical `YYYY-MM-DD-v1` form.

use crate::core::{Grid, derive_seed};
use crate::dictionary::DictionaryIndex;
use crate::scoring::max_score;
use crate::solver::Solver;
use log::info;
use rustc_hash::FxHashSet;
use std::fmt;
use std::sync::Arc;

/// Suffix appended to dates to form puzzle identifiers
pub const ID_VERSION: &str = "v1";

/// Error type for malformed dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleIdError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for PuzzleIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(date) => {
                write!(f, "Date must look like YYYY-MM-DD, got '{date}'")
            }
            Self::OutOfRange(date) => write!(f, "'{date}' is not a calendar day"),
        }
    }
}

impl std::error::Error for PuzzleIdError {}

/// Build the puzzle identifier for a calendar date
///
/// # Errors
/// Returns `PuzzleIdError` unless `date` is `YYYY-MM-DD` naming a real
/// calendar day (proleptic Gregorian, so `2024-02-29` is accepted and
/// `2023-02-29` is not).
///
/// # Examples
/// ```
/// use word_hunt::puzzle::puzzle_id_for_date;
///
/// assert_eq!(puzzle_id_for_date("2024-01-15").unwrap(), "2024-01-15-v1");
/// assert!(puzzle_id_for_date("15/01/2024").is_err());
/// assert!(puzzle_id_for_date("2024-02-31").is_err());
/// ```
pub fn puzzle_id_for_date(date: &str) -> Result<String, PuzzleIdError> {
    let date = date.trim();
    let bytes = date.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(PuzzleIdError::InvalidFormat(date.to_string()));
    }

    let year: u32 = date[..4]
        .parse()
        .map_err(|_| PuzzleIdError::InvalidFormat(date.to_string()))?;
    let month: u32 = date[5..7]
        .parse()
        .map_err(|_| PuzzleIdError::InvalidFormat(date.to_string()))?;
    let day: u32 = date[8..10]
        .parse()
        .map_err(|_| PuzzleIdError::InvalidFormat(date.to_string()))?;
    if !(1..=12).contains(&month) || !(1..=days_in_month(year, month)).contains(&day) {
        return Err(PuzzleIdError::OutOfRange(date.to_string()));
    }

    Ok(format!("{date}-{ID_VERSION}"))
}

const fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// One day's puzzle: identifier, seed, grid and canonical solution
#[derive(Debug, Clone)]
pub struct Puzzle {
    id: String,
    seed: u32,
    grid: Grid,
    dictionary: Arc<DictionaryIndex>,
    solution: Vec<String>,
    solution_set: FxHashSet<String>,
}

impl Puzzle {
    /// Generate and solve the puzzle for an identifier
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use word_hunt::dictionary::loader::embedded_index;
    /// use word_hunt::puzzle::Puzzle;
    ///
    /// let dictionary = Arc::new(embedded_index());
    /// let puzzle = Puzzle::new("2024-01-15-v1", dictionary);
    /// assert_eq!(puzzle.seed(), 3_140_140_472);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, dictionary: Arc<DictionaryIndex>) -> Self {
        let id = id.into();
        let seed = derive_seed(&id);
        let mut puzzle = Self::from_grid(Grid::generate(seed), dictionary);
        puzzle.id = id;
        puzzle.seed = seed;
        puzzle
    }

    /// Solve a hand-entered grid (no identifier, seed 0)
    #[must_use]
    pub fn from_grid(grid: Grid, dictionary: Arc<DictionaryIndex>) -> Self {
        let solution = Solver::new(&dictionary).solve(&grid);
        let solution_set = solution.iter().cloned().collect();

        Self {
            id: String::new(),
            seed: 0,
            grid,
            dictionary,
            solution,
            solution_set,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shared dictionary this puzzle was solved against
    #[must_use]
    pub fn dictionary(&self) -> &Arc<DictionaryIndex> {
        &self.dictionary
    }

    /// Solution words, longest first
    #[must_use]
    pub fn solution(&self) -> &[String] {
        &self.solution
    }

    #[must_use]
    pub const fn solution_set(&self) -> &FxHashSet<String> {
        &self.solution_set
    }

    /// Highest score attainable on this grid
    #[must_use]
    pub fn max_score(&self) -> u32 {
        max_score(&self.solution)
    }

    /// Log a one-line summary of the puzzle
    pub fn log_summary(&self) {
        info!(
            "puzzle '{}' (seed {}): {} words, max score {}",
            self.id,
            self.seed,
            self.solution.len(),
            self.max_score()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dictionary() -> Arc<DictionaryIndex> {
        Arc::new(DictionaryIndex::build("cat\ncats\nact\n"))
    }

    #[test]
    fn id_for_valid_date() {
        assert_eq!(puzzle_id_for_date("2024-01-15").unwrap(), "2024-01-15-v1");
        assert_eq!(puzzle_id_for_date(" 1999-12-31 ").unwrap(), "1999-12-31-v1");
    }

    #[test]
    fn id_rejects_bad_format() {
        for bad in ["2024-1-15", "2024/01/15", "20240115", "", "2024-01-1x"] {
            assert!(
                matches!(puzzle_id_for_date(bad), Err(PuzzleIdError::InvalidFormat(_))),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn id_rejects_out_of_range() {
        for bad in ["2024-13-01", "2024-00-10", "2024-01-32", "2024-01-00"] {
            assert!(matches!(
                puzzle_id_for_date(bad),
                Err(PuzzleIdError::OutOfRange(_))
            ));
        }
    }

    #[test]
    fn id_checks_days_per_month() {
        for bad in ["2024-02-31", "2024-02-30", "2023-02-29", "1900-02-29", "2024-04-31"] {
            assert_eq!(
                puzzle_id_for_date(bad),
                Err(PuzzleIdError::OutOfRange(bad.to_string())),
                "{bad} accepted"
            );
        }
        for good in ["2024-02-29", "2000-02-29", "2023-02-28", "2024-04-30", "2024-12-31"] {
            assert_eq!(puzzle_id_for_date(good), Ok(format!("{good}-v1")));
        }
    }

    #[test]
    fn puzzle_is_reproducible() {
        let dictionary = small_dictionary();
        let a = Puzzle::new("2024-01-15-v1", Arc::clone(&dictionary));
        let b = Puzzle::new("2024-01-15-v1", dictionary);
        assert_eq!(a.seed(), 3_140_140_472);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.solution(), b.solution());
    }

    #[test]
    fn from_grid_solves_layout() {
        let grid: Grid = "c a x x / t s x x / x x x x / x x x x".parse().unwrap();
        let puzzle = Puzzle::from_grid(grid, small_dictionary());
        assert_eq!(puzzle.solution(), &["cats", "act", "cat"]);
        assert_eq!(puzzle.solution_set().len(), 3);
        assert_eq!(puzzle.max_score(), 4);
        assert_eq!(puzzle.id(), "");
    }

    #[test]
    fn empty_dictionary_puzzle_is_valid() {
        let puzzle = Puzzle::new("2024-01-15-v1", Arc::new(DictionaryIndex::default()));
        assert!(puzzle.solution().is_empty());
        assert_eq!(puzzle.max_score(), 0);
    }
}
