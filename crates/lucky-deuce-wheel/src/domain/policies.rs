//! Spin policies for the roulette wheel.
//!
//! Both policies share the `SpinPolicy` contract, so a caller holding a
//! `Box<dyn SpinPolicy>` cannot tell which one is producing its pockets.

use std::fmt;

use lucky_deuce_core::policy::{DOUBLE_ZERO, SpinPolicy};
use lucky_deuce_core::rng::EntropySource;

use super::history::RecencyBuffer;

/// History window the honest policy checks draws against.
pub const HONEST_HISTORY_CAPACITY: usize = 10;

/// History window the predictable policy checks candidates against.
pub const PREDICTABLE_HISTORY_CAPACITY: usize = 20;

/// A draw already seen this many times in the window is rejected.
const MAX_RECENT_OCCURRENCES: usize = 2;

/// Count of non-special pockets; modulus of the recurrence.
const RECURRENCE_MODULUS: u32 = 37;

const RECURRENCE_INCREMENT: u32 = 13;

/// Which policy a wheel should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Entropy-driven draws with run rejection.
    Honest,
    /// Seeded two-term recurrence.
    Predictable,
}

impl PolicyKind {
    /// Builds a fresh policy of this kind.
    ///
    /// The honest policy keeps `entropy` for every draw; the predictable
    /// policy only draws its two seed terms from it and then drops it.
    #[must_use]
    pub fn build(self, mut entropy: Box<dyn EntropySource>) -> Box<dyn SpinPolicy> {
        match self {
            Self::Honest => Box::new(HonestPolicy::new(entropy)),
            Self::Predictable => Box::new(PredictablePolicy::new(entropy.as_mut())),
        }
    }
}

/// Draws pockets uniformly, resampling any draw that would appear a third
/// time within the last `HONEST_HISTORY_CAPACITY` outputs.
pub struct HonestPolicy {
    entropy: Box<dyn EntropySource>,
    history: RecencyBuffer,
}

impl HonestPolicy {
    /// Creates a policy that draws from `entropy`, with empty history.
    #[must_use]
    pub fn new(entropy: Box<dyn EntropySource>) -> Self {
        Self {
            entropy,
            history: RecencyBuffer::new(HONEST_HISTORY_CAPACITY),
        }
    }

    fn appears_random(&self, candidate: u32) -> bool {
        self.history.count(candidate) < MAX_RECENT_OCCURRENCES
    }
}

impl fmt::Debug for HonestPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HonestPolicy")
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl SpinPolicy for HonestPolicy {
    fn next_number(&mut self) -> u32 {
        loop {
            let candidate = self.entropy.next_u32_range(0, DOUBLE_ZERO);
            if self.appears_random(candidate) {
                self.history.push(candidate);
                return candidate;
            }
            tracing::debug!(candidate, "resampling draw that would form a run");
        }
    }
}

/// Produces pockets from `(first * second + 13) mod 37`, shifting the pair
/// forward each call and bumping any candidate already seen in the last
/// `PREDICTABLE_HISTORY_CAPACITY` outputs by one.
///
/// The bump is not wrapped: a bumped 36 yields 37, the double-zero pocket.
#[derive(Debug, Clone)]
pub struct PredictablePolicy {
    first_term: u32,
    second_term: u32,
    history: RecencyBuffer,
}

impl PredictablePolicy {
    /// Draws both seed terms from `entropy`. This is the only entropy the
    /// policy ever consumes.
    #[must_use]
    pub fn new(entropy: &mut dyn EntropySource) -> Self {
        let first_term = entropy.next_u32_range(0, DOUBLE_ZERO);
        let second_term = entropy.next_u32_range(0, DOUBLE_ZERO);
        Self::from_seed_terms(first_term, second_term)
    }

    /// Starts the recurrence from known seed terms. Terms above
    /// `DOUBLE_ZERO` are accepted; the first output is still reduced onto
    /// the wheel.
    #[must_use]
    pub fn from_seed_terms(first_term: u32, second_term: u32) -> Self {
        Self {
            first_term,
            second_term,
            history: RecencyBuffer::new(PREDICTABLE_HISTORY_CAPACITY),
        }
    }
}

impl SpinPolicy for PredictablePolicy {
    #[allow(clippy::cast_possible_truncation)]
    fn next_number(&mut self) -> u32 {
        // Seed terms may be any u32; the remainder is below the modulus.
        let product = u64::from(self.first_term) * u64::from(self.second_term);
        let mut candidate = ((product + u64::from(RECURRENCE_INCREMENT))
            % u64::from(RECURRENCE_MODULUS)) as u32;
        if self.history.contains(candidate) {
            candidate += 1;
        }
        self.first_term = self.second_term;
        self.second_term = candidate;
        self.history.push(candidate);
        candidate
    }
}
