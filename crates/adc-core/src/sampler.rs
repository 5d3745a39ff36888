//! Synthetic ADC sample source.
//!
//! There is no real converter attached; [`RandomSampler`] stands in for one by
//! drawing uniformly distributed integers over the converter's range.
//!
//! # Seeding
//!
//! The production sampler is seeded once per process from OS entropy, so two
//! clients started in the same second still produce different streams.  Tests
//! use [`RandomSampler::with_seed`] to get a reproducible sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of distinct codes the simulated converter produces (10-bit).
///
/// Every sample lies in `0..ADC_RESOLUTION`.
pub const ADC_RESOLUTION: i32 = 1024;

/// Anything that can produce one ADC reading on demand.
pub trait AdcSampler {
    /// Takes one sample.
    fn sample(&mut self) -> i32;
}

/// Pseudo-random 10-bit sampler.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Creates a sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a sampler with a fixed seed for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl AdcSampler for RandomSampler {
    fn sample(&mut self) -> i32 {
        self.rng.gen_range(0..ADC_RESOLUTION)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
