//! Puzzle seed derivation
//!
//! Maps a puzzle identifier (e.g. `2024-01-15-v1`) to a 32-bit seed.
//! The mixing constants are part of the puzzle protocol: changing any of them
//! changes every published puzzle.

/// Initial accumulator, combined with the identifier's byte length
const SEED_INIT: u32 = 0x6A09_E667;

/// Per-byte multiplier
const BYTE_MULTIPLIER: u32 = 0xCC9E_2D51;

/// Finisher multipliers (avalanche rounds)
const FINISH_1: u32 = 0x85EB_CA6B;
const FINISH_2: u32 = 0xC2B2_AE35;

/// Derive the puzzle seed for an identifier
///
/// Total and platform independent: all arithmetic wraps modulo 2^32 and the
/// identifier is consumed as raw UTF-8 bytes.
///
/// # Examples
/// ```
/// use word_hunt::core::derive_seed;
///
/// assert_eq!(derive_seed("2024-01-15-v1"), 3_140_140_472);
/// assert_eq!(derive_seed("2024-01-15-v1"), derive_seed("2024-01-15-v1"));
/// ```
#[must_use]
pub fn derive_seed(id: &str) -> u32 {
    let bytes = id.as_bytes();

    // Lengths beyond u32::MAX wrap, same as the reference arithmetic
    let mut h = SEED_INIT ^ bytes.len() as u32;
    for &byte in bytes {
        h = (h ^ u32::from(byte)).wrapping_mul(BYTE_MULTIPLIER);
        h = h.rotate_left(13);
    }

    h = (h ^ (h >> 16)).wrapping_mul(FINISH_1);
    h = (h ^ (h >> 13)).wrapping_mul(FINISH_2);
    h ^ (h >> 16)
}
