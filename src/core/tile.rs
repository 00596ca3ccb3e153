//! Grid tile representation
//!
//! A tile is a single lowercase letter, or the combined `qu` tile which is one
//! traversable cell spelling two letters. A bare `q` is never a tile.

use std::fmt;

/// One cell of the puzzle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// A single ASCII lowercase letter (`b'a'..=b'z'`)
    Letter(u8),
    /// The combined `qu` tile
    Qu,
}

/// Error type for unparseable tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    Empty,
    LoneQ,
    InvalidToken(String),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Tile must not be empty"),
            Self::LoneQ => write!(f, "'q' only appears as the 'qu' tile"),
            Self::InvalidToken(token) => {
                write!(f, "'{token}' is not a tile (expected a-z or 'qu')")
            }
        }
    }
}

impl std::error::Error for TileError {}

impl Tile {
    /// Create a single-letter tile
    ///
    /// Returns `None` unless `letter` is an ASCII letter other than `q`; upper
    /// case is folded.
    #[must_use]
    pub const fn letter(letter: u8) -> Option<Self> {
        if letter.is_ascii_alphabetic() && letter.to_ascii_lowercase() != b'q' {
            Some(Self::Letter(letter.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Parse a tile token: one letter, or `qu` in any case
    ///
    /// # Errors
    /// Returns `TileError` for empty input, a lone `q`, or anything other than
    /// a letter or `qu`.
    ///
    /// # Examples
    /// ```
    /// use word_hunt::core::Tile;
    ///
    /// assert_eq!(Tile::parse("a").unwrap(), Tile::Letter(b'a'));
    /// assert_eq!(Tile::parse("QU").unwrap(), Tile::Qu);
    /// assert!(Tile::parse("ab").is_err());
    /// assert!(Tile::parse("q").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, TileError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(TileError::Empty);
        }
        if token.eq_ignore_ascii_case("qu") {
            return Ok(Self::Qu);
        }

        match token.as_bytes() {
            [b'q' | b'Q'] => Err(TileError::LoneQ),
            [byte] => Self::letter(*byte).ok_or_else(|| TileError::InvalidToken(token.to_string())),
            _ => Err(TileError::InvalidToken(token.to_string())),
        }
    }

    /// Lowercase spelling of this tile
    ///
    /// Upper case payloads are folded. A payload that is not an ASCII letter
    /// spells `"?"`, which no dictionary word contains.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

        match self {
            Self::Letter(letter) => {
                let folded = letter.to_ascii_lowercase();
                if folded.is_ascii_lowercase() {
                    let i = usize::from(folded - b'a');
                    &LETTERS[i..=i]
                } else {
                    "?"
                }
            }
            Self::Qu => "qu",
        }
    }

    /// Number of letters this tile contributes to a word (1 or 2)
    #[inline]
    #[must_use]
    pub const fn letter_count(self) -> usize {
        match self {
            Self::Letter(_) => 1,
            Self::Qu => 2,
        }
    }

    /// Append this tile's letters to a word under construction
    #[inline]
    pub fn push_onto(self, word: &mut String) {
        word.push_str(self.as_str());
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "{}", char::from(letter.to_ascii_uppercase())),
            Self::Qu => write!(f, "Qu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_letters() {
        assert_eq!(Tile::parse("e"), Ok(Tile::Letter(b'e')));
        assert_eq!(Tile::parse("Z"), Ok(Tile::Letter(b'z')));
        assert_eq!(Tile::parse(" k "), Ok(Tile::Letter(b'k')));
    }

    #[test]
    fn parse_qu_any_case() {
        assert_eq!(Tile::parse("qu"), Ok(Tile::Qu));
        assert_eq!(Tile::parse("Qu"), Ok(Tile::Qu));
        assert_eq!(Tile::parse("QU"), Ok(Tile::Qu));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Tile::parse(""), Err(TileError::Empty));
        assert!(matches!(Tile::parse("ab"), Err(TileError::InvalidToken(_))));
        assert!(matches!(Tile::parse("3"), Err(TileError::InvalidToken(_))));
        assert!(matches!(Tile::parse("é"), Err(TileError::InvalidToken(_))));
    }

    #[test]
    fn lone_q_is_not_a_tile() {
        assert_eq!(Tile::parse("q"), Err(TileError::LoneQ));
        assert_eq!(Tile::parse("Q"), Err(TileError::LoneQ));
        assert_eq!(Tile::letter(b'q'), None);
        assert_eq!(Tile::letter(b'Q'), None);
    }

    #[test]
    fn unchecked_payloads_still_spell() {
        assert_eq!(Tile::Letter(b'C').as_str(), "c");
        assert_eq!(Tile::Letter(b'!').as_str(), "?");
        assert_eq!(Tile::Letter(0).as_str(), "?");
        assert_eq!(Tile::Letter(0xFF).as_str(), "?");
    }

    #[test]
    fn spelling_and_length() {
        assert_eq!(Tile::Letter(b'a').as_str(), "a");
        assert_eq!(Tile::Letter(b'z').as_str(), "z");
        assert_eq!(Tile::Qu.as_str(), "qu");
        assert_eq!(Tile::Letter(b'm').letter_count(), 1);
        assert_eq!(Tile::Qu.letter_count(), 2);
    }

    #[test]
    fn push_onto_appends_both_qu_letters() {
        let mut word = String::from("s");
        Tile::Qu.push_onto(&mut word);
        Tile::Letter(b'i').push_onto(&mut word);
        assert_eq!(word, "squi");
    }

    #[test]
    fn display_is_upper_case() {
        assert_eq!(Tile::Letter(b'c').to_string(), "C");
        assert_eq!(Tile::Qu.to_string(), "Qu");
    }
}
