//! Lucky Deuce interactive shell entry point.

use std::error::Error;
use std::io;

use lucky_deuce_cli::config::ShellConfig;
use lucky_deuce_cli::shell::Shell;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber on stderr so the prompt stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .json()
        .init();

    // Read configuration from environment.
    let config = ShellConfig::from_env()?;
    tracing::info!(
        output = ?config.output,
        seeded = config.seed.is_some(),
        "Starting Lucky Deuce session"
    );

    let mut shell = Shell::new(Box::new(config.entropy()), config.output);
    shell.run(&mut io::stdin().lock(), &mut io::stdout().lock())?;

    tracing::info!("Lucky Deuce session ended");
    Ok(())
}
