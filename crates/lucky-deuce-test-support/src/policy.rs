//! Test policies — stub `SpinPolicy` implementations for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lucky_deuce_core::policy::SpinPolicy;

/// Shared handle onto a `RecordingPolicy`'s invocation count. Stays readable
/// after the policy itself has been boxed and handed away.
#[derive(Debug, Clone, Default)]
pub struct InvocationCounter(Arc<AtomicUsize>);

impl InvocationCounter {
    /// Number of `next_number` calls recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// A policy that records every `next_number` call and always returns the
/// configured value. Touches no entropy and keeps no history.
#[derive(Debug)]
pub struct RecordingPolicy {
    value: u32,
    counter: InvocationCounter,
}

impl RecordingPolicy {
    /// Create a recording policy that always produces `value`.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self {
            value,
            counter: InvocationCounter::default(),
        }
    }

    /// Returns a handle onto this policy's invocation count.
    #[must_use]
    pub fn counter(&self) -> InvocationCounter {
        self.counter.clone()
    }
}

impl SpinPolicy for RecordingPolicy {
    fn next_number(&mut self) -> u32 {
        self.counter.0.fetch_add(1, Ordering::SeqCst);
        self.value
    }
}
