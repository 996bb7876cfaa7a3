//! Swap seam implemented by every pool.
//!
//! [`SwapPool`] covers the trading side of a pool:
//!
//! 1. **Execute** - [`SwapPool::swap_exact_in`] commits an exact-in swap.
//! 2. **Preview** - [`SwapPool::preview_swap`] prices the same swap
//!    without touching state.
//! 3. **Inspect** - [`SwapPool::assets`] and [`SwapPool::fee_rate`].
//!
//! # Fee Deduction Invariant
//!
//! The fee is deducted from the input before pricing and stays in the
//! input reserve:
//!
//! ```text
//! fee        = floor(amount_in * fee_num / fee_den)
//! net_input  = amount_in - fee
//! amount_out = reserve_out - floor(reserve_in * reserve_out / (reserve_in + net_input))
//! ```

use crate::domain::{Amount, AssetId, AssetPair, FeeRate, SwapQuote};
use crate::error::AmmError;

/// Trading interface of a two-asset pool.
///
/// # Errors
///
/// Common error variants across implementations:
///
/// - [`AmmError::NotInitialized`] - the pool has no asset pair yet
/// - [`AmmError::InvalidAsset`] - input asset is not one of the pool's two
/// - [`AmmError::InsufficientLiquidity`] - the trade would drain or is dust
/// - [`AmmError::Overflow`] - a value left its representable range
pub trait SwapPool {
    /// Sells exactly `amount_in` of `asset_in` for the other asset.
    ///
    /// The swap either commits fully or returns an error and changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// See the trait-level list; additionally
    /// [`AmmError::AmountMustBePositive`] for a zero input.
    fn swap_exact_in(&mut self, amount_in: Amount, asset_in: &AssetId) -> Result<SwapQuote, AmmError>;

    /// Prices the swap [`SwapPool::swap_exact_in`] would perform now.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SwapPool::swap_exact_in`].
    fn preview_swap(&self, amount_in: Amount, asset_in: &AssetId) -> Result<SwapQuote, AmmError>;

    /// The pool's two assets in creation order.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`] before the pool is initialized.
    fn assets(&self) -> Result<AssetPair, AmmError>;

    /// Fee charged on swap inputs.  Constant for the lifetime of the pool.
    #[must_use]
    fn fee_rate(&self) -> FeeRate;
}
