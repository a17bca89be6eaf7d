//! Lucky Deuce — shell error types.

use thiserror::Error;

/// A configuration variable is present but holds an invalid value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The seed variable is not an unsigned 64-bit integer.
    #[error("{var} must be a valid u64: {source}")]
    InvalidSeed {
        /// The offending variable name.
        var: &'static str,
        /// The underlying parse failure.
        source: std::num::ParseIntError,
    },

    /// The output variable names no known format.
    #[error("{var} must be `text` or `json`, got `{value}`")]
    UnknownOutput {
        /// The offending variable name.
        var: &'static str,
        /// The rejected value, trimmed.
        value: String,
    },
}

/// Startup and runtime errors for the interactive shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A configuration variable is present but invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading commands or writing results failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a JSON spin record failed.
    #[error("output encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
