//! Command handlers for the roulette wheel.
//!
//! This module contains application-level handler functions that apply a
//! parsed command to a wheel: spin it, or swap in a freshly built policy.

use lucky_deuce_core::rng::EntropyProvider;

use crate::domain::commands::WheelCommand;
use crate::domain::policies::PolicyKind;
use crate::domain::roulette::Roulette;

/// What handling a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The wheel was spun and landed on this pocket.
    Spun(u32),
    /// A fresh policy of this kind is now active.
    PolicySelected(PolicyKind),
    /// The session should end.
    Exit,
}

/// Handles a `WheelCommand` against `roulette`.
///
/// Policy selection builds the new policy from an entropy source taken from
/// `provider`, so no state from the previous policy survives the swap.
pub fn handle_command(
    roulette: &mut Roulette,
    command: WheelCommand,
    provider: &mut dyn EntropyProvider,
) -> CommandOutcome {
    match command {
        WheelCommand::Exit => CommandOutcome::Exit,
        WheelCommand::SelectPolicy(kind) => {
            roulette.set_policy(kind.build(provider.provide()));
            tracing::debug!(?kind, "policy selected");
            CommandOutcome::PolicySelected(kind)
        }
        WheelCommand::Spin => CommandOutcome::Spun(roulette.spin()),
    }
}
