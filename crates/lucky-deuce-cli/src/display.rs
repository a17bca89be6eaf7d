//! Rendering of pockets for the terminal.

use lucky_deuce_core::policy::DOUBLE_ZERO;
use serde::Serialize;

/// Label printed for a pocket: `00` for the double zero, decimal otherwise.
#[must_use]
pub fn pocket_label(value: u32) -> String {
    if value == DOUBLE_ZERO {
        "00".to_owned()
    } else {
        value.to_string()
    }
}

/// One spin as written in JSON output mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpinRecord {
    /// Display label.
    pub pocket: String,
    /// Raw pocket value.
    pub value: u32,
}

impl SpinRecord {
    /// Builds the record for `value`, deriving its display label.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self {
            pocket: pocket_label(value),
            value,
        }
    }
}
