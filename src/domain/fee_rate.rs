//! Swap fee expressed as an exact integer fraction.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::mul_div;

/// A swap fee `numerator / denominator` charged on the input amount.
///
/// The fee is always truncated toward zero, so the protocol never collects
/// more than the nominal rate.  The fee stays in the pool and accrues to
/// LP holders.
///
/// # Examples
///
/// ```
/// use cpmm_core::domain::{Amount, FeeRate};
///
/// let fee = FeeRate::DEFAULT.fee_on(Amount::new(100_000)).expect("no overflow");
/// assert_eq!(fee, Amount::new(300));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeRate {
    numerator: u64,
    denominator: u64,
}

impl FeeRate {
    /// 0.3%, the rate used by the reference pool.
    pub const DEFAULT: Self = Self {
        numerator: 3,
        denominator: 1_000,
    };

    /// No fee.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// Creates a fee rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `denominator` is zero or the
    /// rate is 100% or more (no input would survive the fee).
    pub const fn new(numerator: u64, denominator: u64) -> crate::error::Result<Self> {
        if denominator == 0 {
            return Err(AmmError::InvalidFee("fee denominator must be non-zero"));
        }
        if numerator >= denominator {
            return Err(AmmError::InvalidFee("fee must be below 100%"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Returns the fee numerator.
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Returns the fee denominator.
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Returns `true` if the rate charges nothing.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Computes `floor(amount * numerator / denominator)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] for a zero denominator (only
    /// reachable through deserialized, unvalidated values).
    pub fn fee_on(&self, amount: Amount) -> crate::error::Result<Amount> {
        mul_div(
            amount.get(),
            u128::from(self.numerator),
            u128::from(self.denominator),
            Rounding::Down,
        )
        .map(Amount::new)
    }

    /// Re-checks the rate; used when the value did not come from [`FeeRate::new`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`FeeRate::new`].
    pub const fn validate(&self) -> crate::error::Result<()> {
        match Self::new(self.numerator, self.denominator) {
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
