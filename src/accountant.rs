//! Liquidity accountant: LP minting on deposit and payouts on burn.
//!
//! Pure functions over a [`Reserves`] snapshot.  Each returns a receipt
//! that carries the proposed ledger state; nothing here commits.
//!
//! | Case | LP minted / amounts paid |
//! |------|--------------------------|
//! | First deposit | `floor(sqrt(a * b))` |
//! | Later deposit | `min(floor(a * S / Ra), floor(b * S / Rb))` |
//! | Burn of `l` | `floor(Ra * l / S)`, `floor(Rb * l / S)` |
//!
//! All divisions truncate in favour of the pool.

use tracing::debug;

use crate::config::ExcessPolicy;
use crate::domain::{Amount, DepositReceipt, LpUnits, Reserves, Rounding, WithdrawalReceipt};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, sqrt_product, CheckedArithmetic, U256};

/// LP units for the first deposit into an empty pool: the geometric mean
/// of the two amounts, rounded down.
///
/// # Errors
///
/// - [`AmmError::AmountMustBePositive`] if either amount is zero.
/// - [`AmmError::ZeroLiquidityMinted`] if the root rounds to zero.
///
/// # Examples
///
/// ```
/// use cpmm_core::accountant::initial_lp;
/// use cpmm_core::domain::{Amount, LpUnits};
///
/// assert_eq!(initial_lp(Amount::new(100), Amount::new(400)), Ok(LpUnits::new(200)));
/// ```
pub fn initial_lp(amount_a: Amount, amount_b: Amount) -> Result<LpUnits> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::AmountMustBePositive);
    }
    let minted = sqrt_product(amount_a.get(), amount_b.get())?;
    if minted == 0 {
        return Err(AmmError::ZeroLiquidityMinted);
    }
    Ok(LpUnits::new(minted))
}

/// Plans a deposit of `(amount_a, amount_b)` against `current`.
///
/// An empty pool takes both amounts as its new reserves.  A funded pool
/// mints by the smaller of the two ratios; what happens to the excess on
/// the other side is decided by `policy`.
///
/// # Errors
///
/// - [`AmmError::AmountMustBePositive`] if either amount is zero.
/// - [`AmmError::ZeroLiquidityMinted`] if the deposit is too small to
///   mint a whole LP unit.
/// - [`AmmError::Overflow`] if a reserve or the LP supply would exceed
///   `u128::MAX`.
pub fn plan_deposit(
    current: &Reserves,
    amount_a: Amount,
    amount_b: Amount,
    policy: ExcessPolicy,
) -> Result<DepositReceipt> {
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::AmountMustBePositive);
    }

    let (minted, used_a, used_b) = if current.lp_supply.is_zero() {
        (initial_lp(amount_a, amount_b)?, amount_a, amount_b)
    } else {
        let minted = proportional_mint(current, amount_a, amount_b)?;
        let (used_a, used_b) = match policy {
            ExcessPolicy::Absorb => (amount_a, amount_b),
            ExcessPolicy::Refund => matched_amounts(current, amount_a, amount_b)?,
        };
        (minted, used_a, used_b)
    };

    let reserves_after = Reserves::new(
        current.reserve_a.safe_add(&used_a)?,
        current.reserve_b.safe_add(&used_b)?,
        current.lp_supply.safe_add(&minted)?,
    );
    let receipt = DepositReceipt {
        minted,
        used_a,
        used_b,
        refund_a: amount_a.safe_sub(&used_a)?,
        refund_b: amount_b.safe_sub(&used_b)?,
        reserves_after,
    };

    debug!(
        %amount_a,
        %amount_b,
        %policy,
        minted = %receipt.minted,
        refund_a = %receipt.refund_a,
        refund_b = %receipt.refund_b,
        "planned deposit"
    );
    Ok(receipt)
}

/// Plans burning `lp_amount` units against `current`.
///
/// # Errors
///
/// - [`AmmError::InvalidBurnAmount`] unless `0 < lp_amount <= lp_supply`.
/// - [`AmmError::Overflow`] on an inconsistent snapshot.
pub fn plan_withdrawal(current: &Reserves, lp_amount: LpUnits) -> Result<WithdrawalReceipt> {
    if lp_amount.is_zero() || lp_amount > current.lp_supply {
        return Err(AmmError::InvalidBurnAmount);
    }

    let supply = current.lp_supply.get();
    let amount_a = current.reserve_a.scale(lp_amount.get(), supply, Rounding::Down)?;
    let amount_b = current.reserve_b.scale(lp_amount.get(), supply, Rounding::Down)?;

    let reserves_after = Reserves::new(
        current.reserve_a.safe_sub(&amount_a)?,
        current.reserve_b.safe_sub(&amount_b)?,
        current.lp_supply.safe_sub(&lp_amount)?,
    );

    debug!(burned = %lp_amount, %amount_a, %amount_b, "planned withdrawal");
    Ok(WithdrawalReceipt {
        burned: lp_amount,
        amount_a,
        amount_b,
        reserves_after,
    })
}

fn proportional_mint(current: &Reserves, amount_a: Amount, amount_b: Amount) -> Result<LpUnits> {
    let supply = current.lp_supply.get();
    let ratio_a = mul_div(amount_a.get(), supply, current.reserve_a.get(), Rounding::Down)?;
    let ratio_b = mul_div(amount_b.get(), supply, current.reserve_b.get(), Rounding::Down)?;
    let minted = ratio_a.min(ratio_b);
    if minted == 0 {
        return Err(AmmError::ZeroLiquidityMinted);
    }
    Ok(LpUnits::new(minted))
}

/// Amounts taken under [`ExcessPolicy::Refund`].
///
/// The binding side is found by exact cross-multiplication and taken in
/// full.  The other side is charged its matching amount rounded up, which
/// never exceeds what was offered.
fn matched_amounts(current: &Reserves, amount_a: Amount, amount_b: Amount) -> Result<(Amount, Amount)> {
    let (ra, rb) = (current.reserve_a, current.reserve_b);
    let a_binds = U256::full_mul(amount_a.get(), rb.get()) <= U256::full_mul(amount_b.get(), ra.get());
    if a_binds {
        let matched_b = amount_a.scale(rb.get(), ra.get(), Rounding::Up)?;
        Ok((amount_a, matched_b))
    } else {
        let matched_a = amount_b.scale(ra.get(), rb.get(), Rounding::Up)?;
        Ok((matched_a, amount_b))
    }
}
