//! Snapshot of the ledger state.

use core::fmt;

use super::{Amount, LpUnits, Side};
use crate::math::U256;

/// The three numbers the reserve ledger tracks: both reserves and the
/// outstanding LP supply.
///
/// A `Reserves` value is plain data; whether it is an acceptable pool
/// state is decided by [`ReserveLedger::commit`](crate::ledger::ReserveLedger::commit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reserves {
    /// Custodied balance of asset A.
    pub reserve_a: Amount,
    /// Custodied balance of asset B.
    pub reserve_b: Amount,
    /// Outstanding LP-claim units.
    pub lp_supply: LpUnits,
}

impl Reserves {
    /// The state of a pool that holds nothing.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
        lp_supply: LpUnits::ZERO,
    };

    /// Creates a snapshot.
    pub const fn new(reserve_a: Amount, reserve_b: Amount, lp_supply: LpUnits) -> Self {
        Self {
            reserve_a,
            reserve_b,
            lp_supply,
        }
    }

    /// Returns `true` if the pool holds nothing at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero() && self.lp_supply.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for a trade paying in on `side_in`.
    pub const fn oriented(&self, side_in: Side) -> (Amount, Amount) {
        match side_in {
            Side::A => (self.reserve_a, self.reserve_b),
            Side::B => (self.reserve_b, self.reserve_a),
        }
    }

    /// Rebuilds a snapshot from oriented reserves, keeping `lp_supply`.
    pub const fn with_oriented(&self, side_in: Side, reserve_in: Amount, reserve_out: Amount) -> Self {
        match side_in {
            Side::A => Self::new(reserve_in, reserve_out, self.lp_supply),
            Side::B => Self::new(reserve_out, reserve_in, self.lp_supply),
        }
    }

    /// The constant-product invariant `k = reserve_a * reserve_b`, exact.
    #[must_use]
    pub fn k(&self) -> U256 {
        U256::full_mul(self.reserve_a.get(), self.reserve_b.get())
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reserves(a={}, b={}, lp={})",
            self.reserve_a, self.reserve_b, self.lp_supply
        )
    }
}
