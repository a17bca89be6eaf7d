//! The interactive read-spin-print loop.

use std::fmt;
use std::io::{BufRead, Write};

use lucky_deuce_core::rng::EntropyProvider;
use lucky_deuce_wheel::application::command_handlers::{CommandOutcome, handle_command};
use lucky_deuce_wheel::domain::commands::WheelCommand;
use lucky_deuce_wheel::domain::roulette::Roulette;

use crate::config::OutputFormat;
use crate::display::{SpinRecord, pocket_label};
use crate::error::ShellError;

/// Printed before every line of input.
pub const PROMPT: &str = "Press <Enter> to spin or type \"exit\" to end: ";

/// Leads every text-mode spin line; the label follows after two spaces.
pub const SPIN_PREFIX: &str = "- Number:  ";

/// One terminal session: a wheel plus the entropy every fresh policy draws
/// from.
pub struct Shell {
    roulette: Roulette,
    provider: Box<dyn EntropyProvider>,
    output: OutputFormat,
}

impl Shell {
    /// Starts a session whose wheel runs a fresh honest policy.
    #[must_use]
    pub fn new(mut provider: Box<dyn EntropyProvider>, output: OutputFormat) -> Self {
        let roulette = Roulette::new(provider.provide());
        Self {
            roulette,
            provider,
            output,
        }
    }

    /// Runs until `exit` or end of input.
    ///
    /// Policy switches print nothing; only spins produce output.
    ///
    /// # Errors
    ///
    /// Returns `ShellError` if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), ShellError> {
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                tracing::info!("input closed, ending session");
                return Ok(());
            }

            let command = WheelCommand::parse(&line);
            match handle_command(&mut self.roulette, command, self.provider.as_mut()) {
                CommandOutcome::Exit => return Ok(()),
                CommandOutcome::PolicySelected(_) => {}
                CommandOutcome::Spun(value) => self.report(output, value)?,
            }
        }
    }

    fn report<W: Write>(&self, output: &mut W, value: u32) -> Result<(), ShellError> {
        match self.output {
            OutputFormat::Text => writeln!(output, "{SPIN_PREFIX}{}", pocket_label(value))?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, &SpinRecord::new(value))?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}
