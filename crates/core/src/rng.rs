//! RNG module - injectable random sources for piece selection
//!
//! The engine picks every piece uniformly from the catalog through the
//! [`RandomSource`] trait, so callers decide where randomness comes from:
//!
//! - [`SimpleRng`]: seeded LCG, deterministic across platforms
//! - any [`rand::RngCore`] (e.g. `StdRng`) through a blanket impl
//! - [`ScriptedSource`]: replays a fixed list of picks, for tests and replays

use rand::Rng;

/// Source of uniform picks in `[0, len)`
pub trait RandomSource {
    /// Pick an index in `[0, len)`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: rand::RngCore> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.gen_range(0..len)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift on the full word: the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl RandomSource for SimpleRng {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.next_range(len as u32) as usize
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of picks, cycling when exhausted
///
/// Each scripted value is reduced modulo `len`, so a script written for the
/// seven-piece catalog never produces an out-of-range index.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self {
            picks: picks.into(),
            next: 0,
        }
    }

    /// Always pick the same index
    pub fn constant(pick: usize) -> Self {
        Self::new(vec![pick])
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 || self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.next % self.picks.len()];
        self.next = self.next.wrapping_add(1);
        value % len
    }
}
