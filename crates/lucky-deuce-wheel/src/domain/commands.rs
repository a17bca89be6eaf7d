//! Commands accepted by the roulette wheel.

use super::policies::PolicyKind;

/// Keyword that ends a session.
pub const EXIT_KEYWORD: &str = "exit";

/// Keyword that swaps in a fresh predictable policy.
pub const PREDICTABLE_KEYWORD: &str = "pelayo";

/// Keyword that swaps in a fresh honest policy.
pub const RESET_KEYWORD: &str = "reset";

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelCommand {
    /// End the session.
    Exit,
    /// Replace the active policy with a fresh one of this kind.
    SelectPolicy(PolicyKind),
    /// Spin the wheel once.
    Spin,
}

impl WheelCommand {
    /// Parses one line of input. Keywords match case-insensitively after
    /// trimming surrounding whitespace; anything else is a spin.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let keyword = input.trim();
        if keyword.eq_ignore_ascii_case(EXIT_KEYWORD) {
            Self::Exit
        } else if keyword.eq_ignore_ascii_case(PREDICTABLE_KEYWORD) {
            Self::SelectPolicy(PolicyKind::Predictable)
        } else if keyword.eq_ignore_ascii_case(RESET_KEYWORD) {
            Self::SelectPolicy(PolicyKind::Honest)
        } else {
            Self::Spin
        }
    }
}
