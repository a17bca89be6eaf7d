//! Lucky Deuce — roulette wheel bounded context.
//!
//! Responsible for producing pockets that feel random: recency tracking,
//! the interchangeable spin policies, the wheel that delegates to whichever
//! policy is active, and the commands that drive it.

pub mod application;
pub mod domain;
