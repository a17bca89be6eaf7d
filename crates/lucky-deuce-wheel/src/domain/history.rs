//! Bounded recency history shared by the spin policies.

use std::collections::VecDeque;

/// Fixed-capacity, oldest-first history of recently produced pockets.
///
/// Pushing past capacity evicts the oldest entry, so `len()` never exceeds
/// `capacity()`.
#[derive(Debug, Clone)]
pub struct RecencyBuffer {
    values: VecDeque<u32>,
    capacity: usize,
}

impl RecencyBuffer {
    /// Creates an empty buffer holding at most `capacity` values.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends `value`, evicting the oldest entry when over capacity.
    pub fn push(&mut self, value: u32) {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    /// Number of occurrences of `value` currently held.
    #[must_use]
    pub fn count(&self, value: u32) -> usize {
        self.values.iter().filter(|&&held| held == value).count()
    }

    /// Whether `value` appears anywhere in the buffer.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    /// Number of values currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum number of values held before eviction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates held values from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.values.iter().copied()
    }
}
