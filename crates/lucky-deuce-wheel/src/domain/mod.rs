//! Domain layer for the roulette wheel.

pub mod commands;
pub mod history;
pub mod policies;
pub mod roulette;
