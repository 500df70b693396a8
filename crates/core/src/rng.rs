//! RNG module - deterministic soup seeding
//!
//! A simple LCG (Linear Congruential Generator) used to fill the field with
//! a random soup. Deterministic by construction: the same seed always
//! produces the same soup, which keeps `randomize` testable.

/// Simple LCG RNG using constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SoupRng {
    state: u32,
}

impl SoupRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// True with probability 1/n.
    pub fn one_in(&mut self, n: u32) -> bool {
        self.next_range(n) == 0
    }
}
