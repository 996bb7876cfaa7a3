//! Reserve ledger: the only mutable state of a pool.
//!
//! The ledger holds both reserves and the LP supply.  It has no behaviour
//! beyond invariant checks; all arithmetic happens in [`crate::pricing`]
//! and [`crate::accountant`], and all mutation goes through
//! [`ReserveLedger::commit`], which either accepts the whole proposed
//! state or leaves the ledger untouched.
//!
//! # Invariants
//!
//! Checked on every commit, against the proposed state alone:
//!
//! - `lp_supply == 0` if and only if both reserves are zero.
//! - While `lp_supply > 0`, both reserves are positive.
//!
//! Checked against the transition from the current state:
//!
//! - `lp_supply` unchanged: `reserve_a * reserve_b` does not decrease.
//! - `lp_supply` increased: neither reserve decreases.
//! - `lp_supply` decreased: neither reserve increases, and the amount
//!   leaving each reserve is at most its proportional share,
//!   `(r - r') * S <= r * (S - S')`.

use tracing::{trace, warn};

use crate::domain::{Amount, LpUnits, Reserves};
use crate::error::{AmmError, Result};
use crate::math::U256;

/// Holder of the committed reserve state.
///
/// # Examples
///
/// ```
/// use cpmm_core::domain::{Amount, LpUnits, Reserves};
/// use cpmm_core::ledger::ReserveLedger;
///
/// let mut ledger = ReserveLedger::new();
/// let funded = Reserves::new(Amount::new(100), Amount::new(400), LpUnits::new(200));
/// ledger.commit(funded).expect("valid first deposit");
/// assert_eq!(ledger.current(), funded);
///
/// // A swap-shaped transition that lowers k is refused.
/// let drained = Reserves::new(Amount::new(101), Amount::new(300), LpUnits::new(200));
/// assert!(ledger.commit(drained).is_err());
/// assert_eq!(ledger.current(), funded);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReserveLedger {
    state: Reserves,
}

impl ReserveLedger {
    /// An empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Reserves::EMPTY,
        }
    }

    /// Rebuilds a ledger from persisted state.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] if `state` is neither empty
    /// nor fully funded.
    pub fn restore(state: Reserves) -> Result<Self> {
        check_state(&state)?;
        Ok(Self { state })
    }

    /// The committed `(reserve_a, reserve_b, lp_supply)`.
    #[must_use]
    pub const fn current(&self) -> Reserves {
        self.state
    }

    /// Checks `next` against the invariants without committing it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] naming the broken rule.
    pub fn validate(&self, next: &Reserves) -> Result<()> {
        check_state(next)?;
        check_transition(&self.state, next)
    }

    /// Replaces the committed state with `next`, or fails and changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] if any ledger invariant
    /// would be broken.
    pub fn commit(&mut self, next: Reserves) -> Result<()> {
        if let Err(err) = self.validate(&next) {
            warn!(current = %self.state, proposed = %next, error = %err, "ledger commit rejected");
            return Err(err);
        }
        trace!(previous = %self.state, committed = %next, "ledger commit");
        self.state = next;
        Ok(())
    }
}

fn check_state(state: &Reserves) -> Result<()> {
    if state.lp_supply.is_zero() {
        if !state.reserve_a.is_zero() || !state.reserve_b.is_zero() {
            return Err(AmmError::InvariantViolation(
                "reserves must be zero when lp supply is zero",
            ));
        }
    } else if state.reserve_a.is_zero() || state.reserve_b.is_zero() {
        return Err(AmmError::InvariantViolation(
            "reserves must be positive while lp supply is outstanding",
        ));
    }
    Ok(())
}

fn check_transition(prev: &Reserves, next: &Reserves) -> Result<()> {
    let (s_prev, s_next) = (prev.lp_supply, next.lp_supply);
    if s_next == s_prev {
        if next.k() < prev.k() {
            return Err(AmmError::InvariantViolation(
                "constant product decreased without an lp change",
            ));
        }
    } else if s_next > s_prev {
        if next.reserve_a < prev.reserve_a || next.reserve_b < prev.reserve_b {
            return Err(AmmError::InvariantViolation(
                "reserves decreased while lp supply grew",
            ));
        }
    } else {
        if next.reserve_a > prev.reserve_a || next.reserve_b > prev.reserve_b {
            return Err(AmmError::InvariantViolation(
                "reserves increased while lp supply shrank",
            ));
        }
        let burned = s_prev.get().saturating_sub(s_next.get());
        if !within_share(prev.reserve_a, next.reserve_a, burned, s_prev)
            || !within_share(prev.reserve_b, next.reserve_b, burned, s_prev)
        {
            return Err(AmmError::InvariantViolation(
                "withdrawal exceeds proportional share",
            ));
        }
    }
    Ok(())
}

/// `(before - after) * supply <= before * burned`.
fn within_share(before: Amount, after: Amount, burned: u128, supply: LpUnits) -> bool {
    let taken = before.get().saturating_sub(after.get());
    U256::full_mul(taken, supply.get()) <= U256::full_mul(before.get(), burned)
}
