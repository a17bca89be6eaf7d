//! Lucky Deuce Core — shared abstractions.
//!
//! This crate defines the traits and constants that the wheel and its
//! collaborators depend on. It contains no policy logic.

pub mod policy;
pub mod rng;
