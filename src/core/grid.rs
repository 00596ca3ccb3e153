//! The 4x4 puzzle grid
//!
//! Generation consumes draws from [`Generator`] in a fixed order; the letter
//! table and the `qu` threshold are protocol constants.

use super::rng::Generator;
use super::tile::{Tile, TileError};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Tiles per row/column
pub const GRID_SIDE: usize = 4;

/// Total number of tiles
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Draws below this value place the `qu` tile
pub const QU_THRESHOLD: f64 = 0.08;

/// Letter distribution, weighted by repetition. Order is significant.
pub const LETTER_TABLE: &[u8; 52] = b"eeeeeeaaaaiiiooootttnnnsssrrrhhllddccuummpgbyfwkvxzj";

/// A generated (or hand-entered) puzzle grid in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    tiles: [Tile; GRID_CELLS],
}

/// Error type for invalid grid layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    WrongTileCount(usize),
    InvalidTile(TileError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTileCount(count) => {
                write!(f, "Grid must have exactly {GRID_CELLS} tiles, got {count}")
            }
            Self::InvalidTile(e) => write!(f, "Invalid tile: {e}"),
        }
    }
}

impl std::error::Error for GridError {}

impl From<TileError> for GridError {
    fn from(e: TileError) -> Self {
        Self::InvalidTile(e)
    }
}

impl Grid {
    /// Create a grid from its tiles
    #[must_use]
    pub const fn new(tiles: [Tile; GRID_CELLS]) -> Self {
        Self { tiles }
    }

    /// Generate the grid for a seed
    ///
    /// # Examples
    /// ```
    /// use word_hunt::core::{Grid, derive_seed};
    ///
    /// let seed = derive_seed("2024-01-15-v1");
    /// assert_eq!(Grid::generate(seed), Grid::generate(seed));
    /// ```
    #[must_use]
    pub fn generate(seed: u32) -> Self {
        Self::from_generator(&mut Generator::new(seed))
    }

    /// Fill a grid from an existing generator
    ///
    /// Each position draws once for the `qu` check, then once more for the
    /// letter unless `qu` was placed.
    pub fn from_generator(rng: &mut Generator) -> Self {
        let tiles = std::array::from_fn(|_| {
            if rng.next_f64() < QU_THRESHOLD {
                Tile::Qu
            } else {
                let i = (rng.next_f64() * LETTER_TABLE.len() as f64) as usize;
                Tile::Letter(LETTER_TABLE[i])
            }
        });
        Self { tiles }
    }

    /// All tiles in row-major order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; GRID_CELLS] {
        &self.tiles
    }

    /// Tile at a position
    ///
    /// # Panics
    /// Panics if `index >= 16`
    #[inline]
    #[must_use]
    pub const fn tile(&self, index: usize) -> Tile {
        self.tiles[index]
    }

    /// Iterate over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(GRID_SIDE)
    }
}

impl Index<usize> for Grid {
    type Output = Tile;

    fn index(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse a layout, either as 16 tokens separated by whitespace/commas/slashes
    /// (`"c a t s ..."`) or as a compact string where `q` always takes a
    /// following `u` (`"quitxxxx..."`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|t| !t.is_empty())
            .collect();

        let tiles: Vec<Tile> = if tokens.len() > 1 {
            tokens
                .iter()
                .map(|t| Tile::parse(t))
                .collect::<Result<_, _>>()?
        } else {
            parse_compact(tokens.first().copied().unwrap_or(""))?
        };

        let count = tiles.len();
        let tiles: [Tile; GRID_CELLS] = tiles
            .try_into()
            .map_err(|_| GridError::WrongTileCount(count))?;
        Ok(Self { tiles })
    }
}

fn parse_compact(s: &str) -> Result<Vec<Tile>, TileError> {
    let lower = s.to_ascii_lowercase();
    let mut bytes = lower.bytes().peekable();
    let mut tiles = Vec::with_capacity(GRID_CELLS);

    while let Some(byte) = bytes.next() {
        if byte == b'q' {
            if bytes.next_if_eq(&b'u').is_none() {
                return Err(TileError::LoneQ);
            }
            tiles.push(Tile::Qu);
        } else {
            let tile = Tile::letter(byte)
                .ok_or_else(|| TileError::InvalidToken(char::from(byte).to_string()))?;
            tiles.push(tile);
        }
    }

    Ok(tiles)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|t| format!("{:<2}", t.to_string()))
                .collect();
            write!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::derive_seed;

    #[test]
    fn letter_table_shape() {
        assert_eq!(LETTER_TABLE.len(), 52);
        assert_eq!(LETTER_TABLE.iter().filter(|&&b| b == b'e').count(), 6);
        assert_eq!(LETTER_TABLE.iter().filter(|&&b| b == b'a').count(), 4);
        assert!(!LETTER_TABLE.contains(&b'q'));
    }

    #[test]
    fn pinned_daily_grid() {
        let grid = Grid::generate(derive_seed("2024-01-15-v1"));
        let expected: Grid = "u c a qu / qu e s o / qu qu e o / v d j m".parse().unwrap();
        assert_eq!(grid, expected);
        assert_eq!(grid.tile(0), Tile::Letter(b'u'));
        assert_eq!(grid.tile(3), Tile::Qu);
        assert_eq!(grid.tile(15), Tile::Letter(b'm'));
    }

    #[test]
    fn pinned_seed_zero_grid() {
        let grid = Grid::generate(0);
        assert_eq!(grid.tile(0), Tile::Letter(b'e'));
        assert_eq!(grid.tile(11), Tile::Qu);
        assert_eq!(grid, Grid::generate(1));
    }

    #[test]
    fn generation_is_deterministic() {
        for seed in [0, 1, 42, u32::MAX] {
            assert_eq!(Grid::generate(seed), Grid::generate(seed));
        }
    }

    #[test]
    fn generated_letters_come_from_table() {
        for seed in 0..500 {
            for tile in Grid::generate(seed).tiles() {
                if let Tile::Letter(b) = tile {
                    assert!(LETTER_TABLE.contains(b));
                }
            }
        }
    }

    #[test]
    fn parse_tokens() {
        let grid: Grid = "c a x x / t s x x / x x x x / x x qu x".parse().unwrap();
        assert_eq!(grid.tile(0), Tile::Letter(b'c'));
        assert_eq!(grid.tile(5), Tile::Letter(b's'));
        assert_eq!(grid.tile(14), Tile::Qu);
    }

    #[test]
    fn parse_compact_consumes_qu() {
        let grid: Grid = "quitxxxxxxxxxxxxx".parse().unwrap();
        assert_eq!(grid.tile(0), Tile::Qu);
        assert_eq!(grid.tile(1), Tile::Letter(b'i'));
        assert_eq!(grid.tile(2), Tile::Letter(b't'));
    }

    #[test]
    fn parse_wrong_count() {
        assert_eq!("abc".parse::<Grid>(), Err(GridError::WrongTileCount(3)));
        assert_eq!("".parse::<Grid>(), Err(GridError::WrongTileCount(0)));
    }

    #[test]
    fn parse_invalid_tile() {
        let result = "a b c d e f g h i j k l m n o 9".parse::<Grid>();
        assert!(matches!(result, Err(GridError::InvalidTile(_))));
    }

    #[test]
    fn parse_rejects_lone_q() {
        let tokens = "q a x x / t s x x / x x x x / x x x x".parse::<Grid>();
        assert_eq!(tokens, Err(GridError::InvalidTile(TileError::LoneQ)));

        let compact = "qaxxxxxxxxxxxxxx".parse::<Grid>();
        assert_eq!(compact, Err(GridError::InvalidTile(TileError::LoneQ)));

        let trailing = "xxxxxxxxxxxxxxxq".parse::<Grid>();
        assert_eq!(trailing, Err(GridError::InvalidTile(TileError::LoneQ)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let grid = Grid::generate(derive_seed("2024-01-15-v1"));
        let shown = grid.to_string();
        assert_eq!(shown.lines().count(), 4);
        assert_eq!(shown.parse::<Grid>().unwrap(), grid);
    }
}
