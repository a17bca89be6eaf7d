//! Shell configuration read from the environment.

use lucky_deuce_core::rng::StdEntropy;

use crate::error::{ConfigError, ShellError};

/// Seeds the session's entropy for a reproducible run.
pub const SEED_VAR: &str = "LUCKY_DEUCE_SEED";

/// Selects how spins are printed: `text` (default) or `json`.
pub const OUTPUT_VAR: &str = "LUCKY_DEUCE_OUTPUT";

/// How each spin is written to the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `- Number:  00`
    #[default]
    Text,
    /// `{"pocket":"00","value":37}`
    Json,
}

/// Configuration for one shell session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    /// Optional seed for the session entropy.
    pub seed: Option<u64>,
    /// Spin output format.
    pub output: OutputFormat,
}

impl ShellConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ShellError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value if set.
    ///
    /// # Errors
    ///
    /// Returns `ShellError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ShellError> {
        let seed = lookup(SEED_VAR)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidSeed {
                        var: SEED_VAR,
                        source,
                    })
            })
            .transpose()?;

        let output = match lookup(OUTPUT_VAR) {
            None => OutputFormat::default(),
            Some(raw) => parse_output_format(&raw)?,
        };

        Ok(Self { seed, output })
    }

    /// Builds the session entropy: seeded when configured, OS-seeded
    /// otherwise.
    #[must_use]
    pub fn entropy(&self) -> StdEntropy {
        self.seed.map_or_else(StdEntropy::from_os, StdEntropy::seeded)
    }
}

fn parse_output_format(raw: &str) -> Result<OutputFormat, ConfigError> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("text") {
        Ok(OutputFormat::Text)
    } else if value.eq_ignore_ascii_case("json") {
        Ok(OutputFormat::Json)
    } else {
        Err(ConfigError::UnknownOutput {
            var: OUTPUT_VAR,
            value: value.to_owned(),
        })
    }
}
