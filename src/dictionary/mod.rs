//! Dictionary indexing and loading
//!
//! Turns raw newline-delimited word lists into the immutable
//! [`DictionaryIndex`] shared by the solver and the scoring rule.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use index::{DictionaryIndex, MIN_WORD_LEN, normalize};
