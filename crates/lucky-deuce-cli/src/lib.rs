//! Lucky Deuce — interactive terminal shell.
//!
//! Reads one command per line, drives a `Roulette`, and prints each pocket.

pub mod config;
pub mod display;
pub mod error;
pub mod shell;
