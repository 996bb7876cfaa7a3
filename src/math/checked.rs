//! Checked arithmetic that reports failures as [`AmmError`].
//!
//! The domain newtypes return `Option` from their raw `checked_*`
//! methods.  [`CheckedArithmetic`] lifts those into `Result` with an
//! error message naming the quantity involved, so call sites can use `?`.

use crate::domain::{Amount, LpUnits, Rounding};
use crate::error::AmmError;
use crate::math::mul_div;

/// Fallible arithmetic for reserve-sized quantities.
///
/// No method panics or saturates; every failure is an `Err`.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u128::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// `self * numerator / denominator` through a 256-bit intermediate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the result exceeds `u128::MAX`.
    fn scale(&self, numerator: u128, denominator: u128, rounding: Rounding) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Overflow("amount subtraction underflow"))
    }

    #[inline]
    fn scale(&self, numerator: u128, denominator: u128, rounding: Rounding) -> Result<Self, AmmError> {
        mul_div(self.get(), numerator, denominator, rounding).map(Amount::new)
    }
}

impl CheckedArithmetic for LpUnits {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("lp supply addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Overflow("lp supply subtraction underflow"))
    }

    #[inline]
    fn scale(&self, numerator: u128, denominator: u128, rounding: Rounding) -> Result<Self, AmmError> {
        mul_div(self.get(), numerator, denominator, rounding).map(LpUnits::new)
    }
}
