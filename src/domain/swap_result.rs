//! Outcome of pricing a swap.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// The full breakdown of an exact-in swap as computed by the pricing
/// engine.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee + amount_in_after_fee == amount_in`.
/// - `amount_out < reserve_out` before the trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapQuote {
    amount_in: Amount,
    fee: Amount,
    amount_out: Amount,
    reserve_in_after: Amount,
    reserve_out_after: Amount,
}

impl SwapQuote {
    /// Creates a quote, checking the amount invariants.
    ///
    /// `reserve_in_after` / `reserve_out_after` are the reserves the swap
    /// commits: the full `amount_in` (fee included) is added on the input
    /// side and `amount_out` removed from the output side.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AmountMustBePositive`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out` is zero.
    /// - [`AmmError::InvariantViolation`] if `fee > amount_in`.
    pub const fn new(
        amount_in: Amount,
        fee: Amount,
        amount_out: Amount,
        reserve_in_after: Amount,
        reserve_out_after: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::AmountMustBePositive);
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        if fee.get() > amount_in.get() {
            return Err(AmmError::InvariantViolation("fee exceeds swap input"));
        }
        Ok(Self {
            amount_in,
            fee,
            amount_out,
            reserve_in_after,
            reserve_out_after,
        })
    }

    /// Amount paid in, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Fee retained by the pool.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Input that was priced against the curve.
    pub const fn amount_in_after_fee(&self) -> Amount {
        Amount::new(self.amount_in.get().saturating_sub(self.fee.get()))
    }

    /// Amount paid out.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Input-side reserve once the swap is committed.
    pub const fn reserve_in_after(&self) -> Amount {
        self.reserve_in_after
    }

    /// Output-side reserve once the swap is committed.
    pub const fn reserve_out_after(&self) -> Amount {
        self.reserve_out_after
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote(in={}, fee={}, out={})",
            self.amount_in, self.fee, self.amount_out
        )
    }
}
