//! Core domain types for the daily grid
//!
//! Seed derivation, the deterministic generator, tiles, the grid and its
//! adjacency rule. Everything here is pure and depends only on std.

mod adjacency;
mod grid;
mod path;
mod rng;
mod seed;
mod tile;

pub use adjacency::{NEIGHBOR_MASKS, is_adjacent, neighbors};
pub use grid::{GRID_CELLS, GRID_SIDE, Grid, GridError, LETTER_TABLE, QU_THRESHOLD};
pub use path::{Path, PathError};
pub use rng::Generator;
pub use seed::derive_seed;
pub use tile::{Tile, TileError};
