//! Liquidity seam extending [`SwapPool`].
//!
//! # Liquidity Accounting Invariant
//!
//! [`LiquidityPool::lp_supply`] only changes through
//! [`LiquidityPool::deposit`] and [`LiquidityPool::withdraw`].  Swaps move
//! reserves but never the supply.  Per-holder balances live with the
//! custody layer; a pool only knows the aggregate.

use super::SwapPool;
use crate::domain::{Amount, DepositReceipt, LpUnits, Reserves, WithdrawalReceipt};
use crate::error::AmmError;

/// Pools that accept deposits against LP units and pay them out on burn.
pub trait LiquidityPool: SwapPool {
    /// Deposits both assets and mints LP units.
    ///
    /// The receipt tells the custody layer how much of each asset to pull
    /// in, how much to hand back, and how many LP units to credit.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before initialization.
    /// - [`AmmError::AmountMustBePositive`] if either amount is zero.
    /// - [`AmmError::ZeroLiquidityMinted`] if no whole unit would be minted.
    /// - [`AmmError::Overflow`] if a reserve or the supply overflows.
    fn deposit(&mut self, amount_a: Amount, amount_b: Amount) -> Result<DepositReceipt, AmmError>;

    /// Burns `lp_amount` units for a proportional share of both reserves,
    /// rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before initialization.
    /// - [`AmmError::InvalidBurnAmount`] unless `0 < lp_amount <= lp_supply`.
    fn withdraw(&mut self, lp_amount: LpUnits) -> Result<WithdrawalReceipt, AmmError>;

    /// Outstanding LP units.
    #[must_use]
    fn lp_supply(&self) -> LpUnits;

    /// Snapshot of the committed reserves and supply.
    #[must_use]
    fn reserves(&self) -> Reserves;
}
