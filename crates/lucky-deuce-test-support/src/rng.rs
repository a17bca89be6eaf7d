//! Test RNG — deterministic `EntropySource` implementations for tests.

use std::collections::VecDeque;

use lucky_deuce_core::rng::{EntropyProvider, EntropySource};

/// An RNG pinned to the bottom of every requested range. A predictable
/// policy seeded from it starts from seed terms `(0, 0)`.
#[derive(Debug)]
pub struct MockRng;

impl EntropySource for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted, which doubles as an assertion that no more entropy
/// was consumed than scripted.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl EntropySource for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

/// An `EntropyProvider` that hands out one scripted `SequenceRng` per
/// `provide` call, in order. Panics if more sources are requested than were
/// scripted.
#[derive(Debug, Default)]
pub struct SequenceProvider {
    scripts: VecDeque<Vec<u32>>,
}

impl SequenceProvider {
    /// Create a provider from one value script per expected policy build.
    #[must_use]
    pub fn new(scripts: Vec<Vec<u32>>) -> Self {
        Self {
            scripts: scripts.into(),
        }
    }

    /// Number of scripts not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.scripts.len()
    }
}

impl EntropyProvider for SequenceProvider {
    fn provide(&mut self) -> Box<dyn EntropySource> {
        let script = self
            .scripts
            .pop_front()
            .expect("SequenceProvider ran out of scripted entropy sources");
        Box::new(SequenceRng::new(script))
    }
}
