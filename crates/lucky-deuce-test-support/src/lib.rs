//! Shared test doubles and utilities for the Lucky Deuce roulette wheel.

mod policy;
mod rng;

pub use policy::{InvocationCounter, RecordingPolicy};
pub use rng::{MockRng, SequenceProvider, SequenceRng};
