//! Seedable jitter generator
//!
//! Stamp texture and per-stamp jitter are random but must be reproducible
//! in tests, so the renderer owns a small xorshift32 generator instead of
//! pulling entropy from the OS.

/// Xorshift32 pseudo-random generator for brush jitter.
#[derive(Debug, Clone)]
pub struct StampRng {
    state: u32,
}

impl StampRng {
    /// Create a generator from a seed. A zero seed is remapped to keep the
    /// xorshift state nonzero.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
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

    /// Uniform float in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[lo, hi)`.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}
