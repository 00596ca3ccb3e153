//! Deterministic puzzle generator
//!
//! A tiny 32-bit generator whose exact bit operations are part of the puzzle
//! protocol. Every implementation must produce the same sequence from the same
//! seed, so this never delegates to a library RNG.

/// Per-draw state increment
const STEP: u32 = 0x6D2B_79F5;

/// 2^32, divisor mapping a 32-bit output into [0, 1)
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Generator state for one puzzle's generation
///
/// Owned by a single generation pass and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    state: u32,
}

impl Generator {
    /// Create a generator from a seed
    ///
    /// A zero seed is replaced by 1.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance the state and return the next raw 32-bit output
    pub const fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STEP);
        let s = self.state;

        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Advance the state and return the next value in [0, 1)
    ///
    /// # Examples
    /// ```
    /// use word_hunt::core::Generator;
    ///
    /// let mut rng = Generator::new(42);
    /// let x = rng.next_f64();
    /// assert!((0.0..1.0).contains(&x));
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

impl Iterator for Generator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
