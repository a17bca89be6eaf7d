//! Number-generation policy abstraction.

/// Highest pocket on a double-zero wheel. Shells render it as `00`.
pub const DOUBLE_ZERO: u32 = 37;

/// A strategy that produces the next pocket of the wheel.
///
/// Implementations own all of their state; callers only ever see the
/// produced value, never which strategy produced it.
pub trait SpinPolicy: Send + Sync {
    /// Produces the next pocket in `[0, DOUBLE_ZERO]`.
    fn next_number(&mut self) -> u32;
}
