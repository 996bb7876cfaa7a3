//! The two assets of a pool and the side an asset sits on.

use core::fmt;

use super::AssetId;
use crate::error::AmmError;

/// Which reserve of the pool an asset maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The first asset (`reserve_a`).
    A,
    /// The second asset (`reserve_b`).
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// The two distinct assets of a pool, in the orientation fixed at
/// initialization.
///
/// Unlike [`PoolId`](super::PoolId) the pair is **not** sorted: `first()`
/// is always the asset whose balance is `reserve_a`.
///
/// # Examples
///
/// ```
/// use cpmm_core::domain::{AssetId, AssetPair, Side};
///
/// let usdc = AssetId::from_bytes([2u8; 32]);
/// let sol = AssetId::from_bytes([1u8; 32]);
/// let pair = AssetPair::new(usdc, sol).expect("distinct assets");
/// assert_eq!(pair.first(), usdc);
/// assert_eq!(pair.side_of(&sol), Ok(Side::B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a pair keeping the given orientation.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if both ids are equal.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> crate::error::Result<Self> {
        if asset_a == asset_b {
            return Err(AmmError::InvalidAsset("pool requires two distinct assets"));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the asset backing `reserve_a`.
    #[must_use]
    pub const fn first(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the asset backing `reserve_b`.
    #[must_use]
    pub const fn second(&self) -> AssetId {
        self.asset_b
    }

    /// Resolves which reserve `asset` maps to.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `asset` is not in the pair.
    pub fn side_of(&self, asset: &AssetId) -> crate::error::Result<Side> {
        if *asset == self.asset_a {
            Ok(Side::A)
        } else if *asset == self.asset_b {
            Ok(Side::B)
        } else {
            Err(AmmError::InvalidAsset("asset is not part of this pool"))
        }
    }
}
