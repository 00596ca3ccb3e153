//! Submission scoring rule
//!
//! Maps a candidate word, the words already found, and the grid's solution set
//! to a point delta. Short, unknown, untraceable and repeated submissions all
//! cost one point; new words earn `length - 2`.

use crate::dictionary::{MIN_WORD_LEN, normalize};
use std::fmt;

/// Points deducted for a duplicate or invalid submission
pub const PENALTY: i32 = -1;

/// Outcome of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    /// In the solution set and not found before
    New,
    /// Already found earlier in this session
    Duplicate,
    /// Too short, not a word, or not traceable on this grid
    Invalid,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Duplicate => write!(f, "duplicate"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

/// Points a newly found word is worth
#[inline]
#[must_use]
pub const fn word_points(len: usize) -> i32 {
    len as i32 - 2
}

/// Score a submission
///
/// The candidate is normalized the same way dictionary entries are. Length is
/// checked first, so a short submission is invalid whatever has been found.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use word_hunt::scoring::{SubmissionStatus, score_delta};
///
/// let solution: FxHashSet<String> = ["cat", "cats"].iter().map(|s| s.to_string()).collect();
/// let mut found = FxHashSet::default();
///
/// assert_eq!(score_delta("Cats", &found, &solution), (2, SubmissionStatus::New));
/// found.insert("cat".to_string());
/// assert_eq!(score_delta("cat", &found, &solution), (-1, SubmissionStatus::Duplicate));
/// assert_eq!(score_delta("it", &found, &solution), (-1, SubmissionStatus::Invalid));
/// ```
#[must_use]
pub fn score_delta<S>(
    word: &str,
    already_found: &std::collections::HashSet<String, S>,
    solution: &std::collections::HashSet<String, S>,
) -> (i32, SubmissionStatus)
where
    S: std::hash::BuildHasher,
{
    classify(&normalize(word), already_found, solution)
}

/// Score an already-normalized candidate
pub(crate) fn classify<S>(
    word: &str,
    already_found: &std::collections::HashSet<String, S>,
    solution: &std::collections::HashSet<String, S>,
) -> (i32, SubmissionStatus)
where
    S: std::hash::BuildHasher,
{
    if word.len() < MIN_WORD_LEN {
        (PENALTY, SubmissionStatus::Invalid)
    } else if already_found.contains(word) {
        (PENALTY, SubmissionStatus::Duplicate)
    } else if solution.contains(word) {
        (word_points(word.len()), SubmissionStatus::New)
    } else {
        (PENALTY, SubmissionStatus::Invalid)
    }
}

/// Highest score attainable on a solution set
#[must_use]
pub fn max_score<'a>(solution: impl IntoIterator<Item = &'a String>) -> u32 {
    solution
        .into_iter()
        .map(|w| w.len().saturating_sub(2) as u32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn duplicate_costs_a_point() {
        let solution = set(&["cat", "cats", "act"]);
        let found = set(&["cat"]);
        assert_eq!(
            score_delta("cat", &found, &solution),
            (-1, SubmissionStatus::Duplicate)
        );
    }

    #[test]
    fn new_word_scores_length_minus_two() {
        let solution = set(&["cat", "cats", "act"]);
        let found = set(&[]);
        assert_eq!(
            score_delta("cats", &found, &solution),
            (2, SubmissionStatus::New)
        );
        assert_eq!(score_delta("act", &found, &solution), (1, SubmissionStatus::New));
    }

    #[test]
    fn too_short_is_invalid_regardless_of_history() {
        let solution = set(&["cat"]);
        for found in [set(&[]), set(&["cat"]), set(&["it"])] {
            assert_eq!(
                score_delta("it", &found, &solution),
                (-1, SubmissionStatus::Invalid)
            );
        }
    }

    #[test]
    fn word_not_on_grid_is_invalid() {
        let solution = set(&["cat"]);
        let found = set(&[]);
        assert_eq!(
            score_delta("dog", &found, &solution),
            (-1, SubmissionStatus::Invalid)
        );
    }

    #[test]
    fn submission_is_normalized() {
        let solution = set(&["cats"]);
        let found = set(&[]);
        assert_eq!(
            score_delta("  C-A-T-S! ", &found, &solution),
            (2, SubmissionStatus::New)
        );
    }

    #[test]
    fn punctuation_only_is_short() {
        let solution = set(&["cat"]);
        assert_eq!(
            score_delta("!!!!", &set(&[]), &solution),
            (-1, SubmissionStatus::Invalid)
        );
    }

    #[test]
    fn max_score_sums_points() {
        let solution = vec!["cats".to_string(), "act".to_string(), "cat".to_string()];
        assert_eq!(max_score(&solution), 4);
        assert_eq!(max_score(&Vec::<String>::new()), 0);
    }

    #[test]
    fn status_display() {
        assert_eq!(SubmissionStatus::New.to_string(), "new");
        assert_eq!(SubmissionStatus::Duplicate.to_string(), "duplicate");
        assert_eq!(SubmissionStatus::Invalid.to_string(), "invalid");
    }
}
