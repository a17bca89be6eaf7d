//! Entropy abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests and replays,
//! a seeded or scripted implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Abstraction over uniform integer generation.
pub trait EntropySource: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;
}

/// Hands out an independent entropy source for every freshly built policy.
pub trait EntropyProvider: Send {
    /// Returns a new entropy source owned by the caller.
    fn provide(&mut self) -> Box<dyn EntropySource>;
}

/// Production entropy backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct StdEntropy(StdRng);

impl StdEntropy {
    /// Seeds from the operating system.
    #[must_use]
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Seeds from a fixed value, making every draw (and every fork)
    /// reproducible.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Derives a child source seeded from this source's own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self(StdRng::seed_from_u64(self.0.next_u64()))
    }
}

impl EntropySource for StdEntropy {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.0.random_range(min..=max)
    }
}

impl EntropyProvider for StdEntropy {
    fn provide(&mut self) -> Box<dyn EntropySource> {
        Box::new(self.fork())
    }
}
