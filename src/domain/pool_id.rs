//! Stable pool identifier.

use core::fmt;

use super::{AssetId, AssetPair};

/// Identifier of a pool, derived from its two assets.
///
/// The ids are stored in canonical (sorted) order, so `(A, B)` and `(B, A)`
/// name the same pool.  This gives "one pool per asset pair" semantics to
/// any lookup table keyed by `PoolId`.
///
/// # Examples
///
/// ```
/// use cpmm_core::domain::{AssetId, PoolId};
///
/// let x = AssetId::from_bytes([1u8; 32]);
/// let y = AssetId::from_bytes([2u8; 32]);
/// assert_eq!(PoolId::from_assets(x, y), PoolId::from_assets(y, x));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolId {
    lo: AssetId,
    hi: AssetId,
}

impl PoolId {
    /// Derives the id for two assets in either order.
    #[must_use]
    pub fn from_assets(x: AssetId, y: AssetId) -> Self {
        if x <= y {
            Self { lo: x, hi: y }
        } else {
            Self { lo: y, hi: x }
        }
    }

    /// Derives the id for an initialized pair.
    #[must_use]
    pub fn from_pair(pair: &AssetPair) -> Self {
        Self::from_assets(pair.first(), pair.second())
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.lo, self.hi)
    }
}
