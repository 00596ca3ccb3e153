//! Play session state
//!
//! Tracks found words in submission order and the running score, which never
//! drops below zero.

use super::rule::{SubmissionStatus, classify};
use crate::core::Path;
use crate::dictionary::normalize;
use crate::puzzle::Puzzle;
use log::debug;
use rustc_hash::FxHashSet;

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Normalized spelling that was scored
    pub word: String,
    pub status: SubmissionStatus,
    /// Raw delta before clamping
    pub delta: i32,
    /// Running score after clamping
    pub score: u32,
}

/// One player's progress on a puzzle
pub struct Session<'a> {
    puzzle: &'a Puzzle,
    found: Vec<String>,
    found_set: FxHashSet<String>,
    score: u32,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            found: Vec::new(),
            found_set: FxHashSet::default(),
            score: 0,
        }
    }

    /// Score a typed word
    pub fn submit(&mut self, word: &str) -> Submission {
        let word = normalize(word);
        let (delta, status) = classify(&word, &self.found_set, self.puzzle.solution_set());

        if status == SubmissionStatus::New {
            self.found_set.insert(word.clone());
            self.found.push(word.clone());
        }
        self.score = self.score.saturating_add_signed(delta);

        debug!("submitted '{word}': {status} ({delta:+}), score {}", self.score);
        Submission {
            word,
            status,
            delta,
            score: self.score,
        }
    }

    /// Score the word spelled by a traced tile path
    pub fn submit_path(&mut self, path: &Path) -> Submission {
        let word = path.spell(self.puzzle.grid());
        self.submit(&word)
    }

    /// Found words in the order they were submitted
    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn puzzle(&self) -> &'a Puzzle {
        self.puzzle
    }

    /// Solution words not yet found, in solution order
    #[must_use]
    pub fn remaining(&self) -> Vec<&'a str> {
        self.puzzle
            .solution()
            .iter()
            .filter(|w| !self.found_set.contains(*w))
            .map(String::as_str)
            .collect()
    }

    /// Whether every solution word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.puzzle.solution().len()
    }
}
