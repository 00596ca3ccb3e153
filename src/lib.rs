//! Word Hunt
//!
//! Daily word-hunt puzzle engine: a reproducible 4x4 letter grid derived from a
//! puzzle identifier, and an exhaustive solver listing every dictionary word
//! that can be traced through adjacent tiles.
//!
//! # Quick Start
//!
//! ```rust
//! use word_hunt::core::{Grid, derive_seed};
//! use word_hunt::dictionary::DictionaryIndex;
//! use word_hunt::solver::solve;
//!
//! let grid = Grid::generate(derive_seed("2024-01-15-v1"));
//! let index = DictionaryIndex::build("code\ncoda\nseas\n");
//!
//! for word in solve(&grid, &index) {
//!     println!("{word}");
//! }
//! ```

// Core domain types
pub mod core;

// Dictionary indexing and loading
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Scoring rule and play sessions
pub mod scoring;

// Puzzle assembly
pub mod puzzle;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
