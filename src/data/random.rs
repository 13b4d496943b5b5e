//! Reseeded uniform draws for the randomized fill policies
//!
//! Each randomized fill starts a fresh generator from the same seed, so the
//! draw sequence (and the buffer it produces) never depends on earlier calls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed every randomized fill starts from
pub const FILL_SEED: u64 = 4793;

/// Uniform draws in `[0, 1)` from a freshly seeded generator
#[derive(Clone, Debug)]
pub struct SeededDraws {
    rng: StdRng,
}

impl SeededDraws {
    /// Generator positioned at the start of the `FILL_SEED` sequence
    pub fn reseeded() -> Self {
        Self {
            rng: StdRng::seed_from_u64(FILL_SEED),
        }
    }

    /// Next uniform value in `[0, 1)`
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// `-1.0` if the next draw is below one half, `+1.0` otherwise
    #[inline]
    pub fn sign(&mut self) -> f64 {
        if self.uniform() < 0.5 { -1.0 } else { 1.0 }
    }

    /// Index `floor(len · u)` for the next draw `u`, clamped into `[0, len)`
    ///
    /// `len` must be non-zero.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        let pos = (len as f64 * self.uniform()) as usize;
        pos.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut a = SeededDraws::reseeded();
        let first: Vec<f64> = (0..16).map(|_| a.uniform()).collect();
        let mut b = SeededDraws::reseeded();
        let second: Vec<f64> = (0..16).map(|_| b.uniform()).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&u| (0.0..1.0).contains(&u)));
    }

    #[test]
    fn test_index_in_range() {
        let mut d = SeededDraws::reseeded();
        for len in 1..50 {
            assert!(d.index(len) < len);
        }
    }
}
