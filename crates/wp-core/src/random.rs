//! Injectable sources of uniform random integers.
//!
//! Selection never reaches for a global RNG; callers hand in a
//! [`RandomSource`]. Real sessions use [`StdRng`]; tests use
//! [`ScriptedSource`] to make every draw predictable.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// A capability that draws uniformly distributed integers.
pub trait RandomSource {
    /// Draw an integer uniformly from `[lower, upper)`.
    ///
    /// Callers guarantee `lower < upper`.
    fn next_int(&mut self, lower: u128, upper: u128) -> u128;
}

impl RandomSource for StdRng {
    fn next_int(&mut self, lower: u128, upper: u128) -> u128 {
        self.random_range(lower..upper)
    }
}

impl RandomSource for ThreadRng {
    fn next_int(&mut self, lower: u128, upper: u128) -> u128 {
        self.random_range(lower..upper)
    }
}

/// A deterministic source that replays a fixed list of draws.
///
/// Draws are returned verbatim, cycling once the list is exhausted, so a
/// script can deliberately step outside the requested range. An empty
/// script always yields `lower`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: Vec<u128>,
    cursor: usize,
}

impl ScriptedSource {
    /// Replay the given draws in order.
    pub fn new(draws: impl IntoIterator<Item = u128>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Always return `draw`.
    pub fn fixed(draw: u128) -> Self {
        Self::new([draw])
    }

    /// How many draws have been taken so far.
    pub fn taken(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, lower: u128, _upper: u128) -> u128 {
        if self.draws.is_empty() {
            self.cursor += 1;
            return lower;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}
