//! Dictionary loading utilities
//!
//! Provides functions to build an index from a file or from the embedded list.
//! A missing source is a policy decision for the caller: [`load_or_empty`]
//! degrades to an empty index, [`load_from_file`] reports the error.

use super::embedded::WORDS;
use super::index::DictionaryIndex;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary index from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_hunt::dictionary::loader::load_from_file;
///
/// let index = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", index.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<DictionaryIndex> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let index = DictionaryIndex::build(&content);

    info!(
        "loaded {} words ({} prefixes) from {}",
        index.len(),
        index.prefix_count(),
        path.display()
    );
    Ok(index)
}

/// Load a dictionary index, falling back to an empty one
///
/// An unreadable source is logged as a warning; the resulting puzzle simply
/// has no findable words.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> DictionaryIndex {
    let path = path.as_ref();
    load_from_file(path).unwrap_or_else(|e| {
        warn!(
            "dictionary {} unavailable ({e}); continuing with an empty dictionary",
            path.display()
        );
        DictionaryIndex::default()
    })
}

/// Build the index for the embedded default word list
///
/// # Examples
/// ```
/// use word_hunt::dictionary::WORDS;
/// use word_hunt::dictionary::loader::embedded_index;
///
/// let index = embedded_index();
/// assert_eq!(index.len(), WORDS.len());
/// ```
#[must_use]
pub fn embedded_index() -> DictionaryIndex {
    DictionaryIndex::from_words(WORDS)
}
