//! Dictionary word and prefix index
//!
//! Normalizes raw word-list text into the set of accepted words and the set of
//! every prefix of every accepted word. The prefix set drives solver pruning.

use rustc_hash::FxHashSet;

/// Minimum length of an accepted word
pub const MIN_WORD_LEN: usize = 3;

/// Immutable word + prefix index
///
/// Invariant: every prefix (length 1..=len) of every word is in `prefixes`,
/// so `words` is a subset of `prefixes`.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

/// Normalize a raw entry: trim, lowercase, keep only `a`-`z`
///
/// # Examples
/// ```
/// use word_hunt::dictionary::normalize;
///
/// assert_eq!(normalize("  Don't\r"), "dont");
/// assert_eq!(normalize("Co-Op"), "coop");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

impl DictionaryIndex {
    /// Build an index from newline-delimited text
    ///
    /// Accepts `\n`, `\r\n` and bare `\r` line endings. Entries shorter than
    /// three letters after normalization are dropped. Empty input yields an
    /// empty index.
    ///
    /// # Examples
    /// ```
    /// use word_hunt::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::build("Cat\r\ncats\nit\n");
    /// assert!(index.contains_word("cats"));
    /// assert!(!index.contains_word("it"));
    /// assert!(index.contains_prefix("ca"));
    /// ```
    #[must_use]
    pub fn build(text: &str) -> Self {
        Self::from_words(text.split(['\n', '\r']))
    }

    /// Build an index from individual raw entries
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for entry in entries {
            index.insert(entry.as_ref());
        }
        index
    }

    fn insert(&mut self, raw: &str) {
        let word = normalize(raw);
        if word.len() < MIN_WORD_LEN {
            return;
        }

        // Normalized words are ASCII, so every byte offset is a char boundary
        for end in 1..=word.len() {
            if !self.prefixes.contains(&word[..end]) {
                self.prefixes.insert(word[..end].to_string());
            }
        }
        self.words.insert(word);
    }

    /// Check whether a normalized word is accepted
    #[inline]
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Check whether a string is a prefix of (or equal to) some accepted word
    #[inline]
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// Number of accepted words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct prefixes
    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Iterate over accepted words in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
