//! 256-bit intermediates for products of two `u128` values.
//!
//! Reserves are `u128`, so `reserve_a * reserve_b` and
//! `amount * lp_supply` need twice that width to be exact.

use uint::construct_uint;

use crate::domain::Rounding;
use crate::error::AmmError;

construct_uint! {
    /// Unsigned 256-bit integer.
    pub struct U256(4);
}

impl U256 {
    /// Exact product of two `u128` values.
    #[must_use]
    pub fn full_mul(a: u128, b: u128) -> Self {
        // 128 + 128 bits never overflows 256.
        Self::from(a) * Self::from(b)
    }

    /// Narrows to `u128`, or `None` if the value does not fit.
    #[must_use]
    pub fn to_u128(self) -> Option<u128> {
        if self.bits() > 128 {
            None
        } else {
            Some(self.low_u128())
        }
    }
}

/// Computes `a * b / denominator` with a 256-bit intermediate and the
/// given rounding.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the result does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use cpmm_core::domain::Rounding;
/// use cpmm_core::math::mul_div;
///
/// assert_eq!(mul_div(u128::MAX, 3, 3, Rounding::Down), Ok(u128::MAX));
/// assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> crate::error::Result<u128> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let (quotient, rem) = U256::full_mul(a, b).div_mod(U256::from(denominator));
    let floor = quotient
        .to_u128()
        .ok_or(AmmError::Overflow("mul_div result exceeds u128"))?;
    match rounding {
        Rounding::Up if !rem.is_zero() => floor
            .checked_add(1)
            .ok_or(AmmError::Overflow("mul_div rounding overflow")),
        Rounding::Up | Rounding::Down => Ok(floor),
    }
}

/// `floor(sqrt(a * b))`, exact for any pair of `u128` inputs.
///
/// # Errors
///
/// [`AmmError::Overflow`] is unreachable in practice: the root of a
/// 256-bit value always fits in `u128`.
pub fn sqrt_product(a: u128, b: u128) -> crate::error::Result<u128> {
    U256::full_mul(a, b)
        .integer_sqrt()
        .to_u128()
        .ok_or(AmmError::Overflow("square root exceeds u128"))
}
