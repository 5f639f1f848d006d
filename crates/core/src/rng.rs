//! RNG module - seedable cell sampling for apple placement
//!
//! A small LCG is enough here: apple placement only needs a uniform-ish pick of
//! a grid cell, and a fixed seed must reproduce the same game for replays.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::Position;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
    seed: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let seed = if seed == 0 { 1 } else { seed };
        Self { state: seed, seed }
    }

    /// Seed from wall-clock time, for non-replay runs.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos();
        Self::new(nanos)
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits (multiply-shift); the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform cell in `[0, w) x [0, h)`. Non-positive dimensions yield the origin.
    pub fn next_cell(&mut self, w: i32, h: i32) -> Position {
        let x = self.next_range(w.max(0) as u32) as i32;
        let y = self.next_range(h.max(0) as u32) as i32;
        Position::new(x, y)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
