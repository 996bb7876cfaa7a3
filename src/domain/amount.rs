//! Raw asset amount with checked arithmetic.

use core::fmt;

use crate::error::AmmError;

/// A raw asset amount in the smallest unit of the asset.
///
/// Reserves are held as `u128` so that sums of many `u64` deposits never
/// wrap.  Arithmetic methods are checked: they return `None` on overflow
/// or underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use cpmm_core::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Widens an interface-level `u64` amount.
    pub const fn from_u64(value: u64) -> Self {
        Self(value as u128)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Narrows the amount to the `u64` used at the pool interface.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the amount exceeds `u64::MAX`.
    pub fn to_u64(&self) -> crate::error::Result<u64> {
        u64::try_from(self.0).map_err(|_| AmmError::Overflow("amount exceeds u64 range"))
    }

    /// Returns `true` if the amount is zero.
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

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
