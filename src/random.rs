//! Deterministic xorshift32 generator for target respawn positions.
//!
//! Seeded from config so replayed sessions respawn targets identically.

#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    /// Seed of 0 is treated as 1 to avoid the all-zero fixed point.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in [min, max)
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}
