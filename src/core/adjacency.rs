//! Spatial relation between grid positions
//!
//! Positions are row-major indices 0..16 over the 4x4 layout. Two positions are
//! adjacent when their Chebyshev distance is exactly 1 (eight neighbours, no
//! wraparound at the edges).

use super::grid::{GRID_CELLS, GRID_SIDE};

/// Neighbour bitmask for each position, bit `j` set when `j` is adjacent
pub const NEIGHBOR_MASKS: [u16; GRID_CELLS] = build_neighbor_masks();

const fn build_neighbor_masks() -> [u16; GRID_CELLS] {
    let mut masks = [0u16; GRID_CELLS];
    let mut a = 0;
    while a < GRID_CELLS {
        let mut b = 0;
        while b < GRID_CELLS {
            if is_adjacent(a, b) {
                masks[a] |= 1 << b;
            }
            b += 1;
        }
        a += 1;
    }
    masks
}

/// Check whether two positions are adjacent
///
/// Out-of-range positions are never adjacent to anything.
///
/// # Examples
/// ```
/// use word_hunt::core::is_adjacent;
///
/// assert!(is_adjacent(0, 5)); // diagonal
/// assert!(!is_adjacent(3, 4)); // no wraparound
/// assert!(!is_adjacent(6, 6));
/// ```
#[must_use]
pub const fn is_adjacent(a: usize, b: usize) -> bool {
    if a >= GRID_CELLS || b >= GRID_CELLS || a == b {
        return false;
    }

    let (row_a, col_a) = (a / GRID_SIDE, a % GRID_SIDE);
    let (row_b, col_b) = (b / GRID_SIDE, b % GRID_SIDE);

    row_a.abs_diff(row_b) <= 1 && col_a.abs_diff(col_b) <= 1
}

/// Iterate over the neighbours of a position in ascending order
///
/// # Panics
/// Panics if `index >= 16`
pub fn neighbors(index: usize) -> impl Iterator<Item = usize> {
    let mask = NEIGHBOR_MASKS[index];
    (0..GRID_CELLS).filter(move |&j| mask & (1 << j) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        for a in 0..GRID_CELLS {
            assert!(!is_adjacent(a, a));
            for b in 0..GRID_CELLS {
                assert_eq!(is_adjacent(a, b), is_adjacent(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn neighbour_counts_by_position() {
        // Corners 3, edges 5, interior 8
        assert_eq!(neighbors(0).count(), 3);
        assert_eq!(neighbors(3).count(), 3);
        assert_eq!(neighbors(12).count(), 3);
        assert_eq!(neighbors(15).count(), 3);
        assert_eq!(neighbors(1).count(), 5);
        assert_eq!(neighbors(4).count(), 5);
        assert_eq!(neighbors(5).count(), 8);
        assert_eq!(neighbors(10).count(), 8);
    }

    #[test]
    fn no_wraparound_across_rows() {
        assert!(!is_adjacent(3, 4));
        assert!(!is_adjacent(7, 8));
        assert!(!is_adjacent(3, 8));
        assert!(!is_adjacent(0, 15));
    }

    #[test]
    fn neighbours_of_corner() {
        let n: Vec<usize> = neighbors(0).collect();
        assert_eq!(n, vec![1, 4, 5]);
    }

    #[test]
    fn masks_match_predicate() {
        for (a, &mask) in NEIGHBOR_MASKS.iter().enumerate() {
            for b in 0..GRID_CELLS {
                assert_eq!(mask & (1 << b) != 0, is_adjacent(a, b));
            }
        }
    }

    #[test]
    fn out_of_range_is_not_adjacent() {
        assert!(!is_adjacent(15, 16));
        assert!(!is_adjacent(16, 15));
    }
}
