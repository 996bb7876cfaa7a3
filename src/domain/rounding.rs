//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the crate.
///
/// Division never happens without a stated direction.  The core rounds
/// in favour of the pool: withdrawals, swap outputs and fees round
/// [`Down`](Rounding::Down); amounts charged to a depositor under the
/// refund policy round [`Up`](Rounding::Up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}
