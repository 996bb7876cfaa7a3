//! LP-claim units.

use core::fmt;

use crate::error::AmmError;

/// Fungible units of proportional ownership of the pool reserves.
///
/// Kept distinct from [`Amount`](super::Amount) so an LP quantity can never
/// be passed where an asset quantity is expected.  The core only tracks the
/// aggregate supply; per-holder balances belong to the custody layer.
///
/// # Examples
///
/// ```
/// use cpmm_core::domain::LpUnits;
///
/// let a = LpUnits::new(1_000);
/// let b = LpUnits::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(LpUnits::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LpUnits(u128);

impl LpUnits {
    /// No LP units.
    pub const ZERO: Self = Self(0);

    /// Creates a new `LpUnits` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Widens an interface-level `u64` LP amount.
    pub const fn from_u64(value: u64) -> Self {
        Self(value as u128)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Narrows to the `u64` used at the pool interface.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the value exceeds `u64::MAX`.
    pub fn to_u64(&self) -> crate::error::Result<u64> {
        u64::try_from(self.0).map_err(|_| AmmError::Overflow("lp units exceed u64 range"))
    }

    /// Returns `true` if zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for LpUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
