//! Application layer for the roulette wheel.

pub mod command_handlers;
