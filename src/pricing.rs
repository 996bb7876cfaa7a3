//! Pricing engine: exact-in swap output under a fee.
//!
//! Stateless and side-effect free.  The same function backs both the
//! read-only quote and the committed swap, so a preview always matches
//! what the swap would do against the same reserves.
//!
//! # Algorithm
//!
//! 1. `fee = floor(amount_in * fee_num / fee_den)`
//! 2. `amount_in_after_fee = amount_in - fee`
//! 3. `k = reserve_in * reserve_out` (256-bit, exact)
//! 4. `new_reserve_in = reserve_in + amount_in_after_fee`
//! 5. `amount_out = reserve_out - floor(k / new_reserve_in)`
//!
//! The committed reserves are `reserve_in + amount_in` (fee included) and
//! `reserve_out - amount_out`.  Step 5 can round the output up by one unit;
//! when the retained fee does not pay for that unit (dust trades, zero-fee
//! pools) the output is taken one lower, so `k` never decreases.

use tracing::debug;

use crate::domain::{Amount, FeeRate, SwapQuote};
use crate::error::{AmmError, Result};
use crate::math::{CheckedArithmetic, U256};

/// Prices an exact-in swap of `amount_in` against `(reserve_in, reserve_out)`.
///
/// # Errors
///
/// - [`AmmError::AmountMustBePositive`] if `amount_in` is zero.
/// - [`AmmError::DivisionByZero`] if `reserve_in + amount_in_after_fee` is zero.
/// - [`AmmError::InsufficientLiquidity`] if the output would be zero or
///   would drain the output reserve.
/// - [`AmmError::Overflow`] if the input reserve would exceed `u128::MAX`.
///
/// # Examples
///
/// ```
/// use cpmm_core::domain::{Amount, FeeRate};
/// use cpmm_core::pricing::quote;
///
/// let q = quote(
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
///     Amount::new(100_000),
///     FeeRate::DEFAULT,
/// )
/// .expect("valid trade");
/// assert_eq!(q.fee(), Amount::new(300));
/// assert_eq!(q.amount_out(), Amount::new(181_323));
/// ```
pub fn quote(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    fee_rate: FeeRate,
) -> Result<SwapQuote> {
    if amount_in.is_zero() {
        return Err(AmmError::AmountMustBePositive);
    }

    let fee = fee_rate.fee_on(amount_in)?;
    let amount_in_after_fee = amount_in.safe_sub(&fee)?;

    let k = U256::full_mul(reserve_in.get(), reserve_out.get());
    let new_reserve_in = reserve_in.safe_add(&amount_in_after_fee)?;

    if new_reserve_in.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let (remaining_out, remainder) = k.div_mod(U256::from(new_reserve_in.get()));
    // k / new_reserve_in <= reserve_out because new_reserve_in >= reserve_in.
    let remaining_out = remaining_out
        .to_u128()
        .ok_or(AmmError::Overflow("remaining output reserve exceeds u128"))?;
    let mut amount_out = reserve_out.safe_sub(&Amount::new(remaining_out))?;

    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let reserve_in_after = reserve_in.safe_add(&amount_in)?;

    // Truncating the remaining reserve rounds the output up by at most one
    // unit.  When the fee is too small to cover that, round down instead so
    // k never decreases.
    if !remainder.is_zero() && U256::full_mul(reserve_in_after.get(), remaining_out) < k {
        amount_out = amount_out.safe_sub(&Amount::new(1))?;
    }
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let reserve_out_after = reserve_out.safe_sub(&amount_out)?;

    debug!(
        %reserve_in,
        %reserve_out,
        %amount_in,
        %fee,
        %amount_out,
        "priced swap"
    );

    SwapQuote::new(amount_in, fee, amount_out, reserve_in_after, reserve_out_after)
}

/// Variant of [`quote`] taking the fee as a raw fraction.
///
/// # Errors
///
/// [`AmmError::InvalidFee`] for an unusable fraction, then the same
/// conditions as [`quote`].
pub fn quote_with_fee(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    fee_numerator: u64,
    fee_denominator: u64,
) -> Result<SwapQuote> {
    let fee_rate = FeeRate::new(fee_numerator, fee_denominator)?;
    quote(reserve_in, reserve_out, amount_in, fee_rate)
}
