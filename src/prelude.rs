//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use cpmm_core::prelude::*;
//! ```

pub use crate::domain::{
    Amount, AssetId, AssetPair, DepositReceipt, FeeRate, LpUnits, PoolId, Reserves, Rounding,
    Side, SwapQuote, WithdrawalReceipt,
};

pub use crate::traits::{LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{ExcessPolicy, PoolConfig};

pub use crate::error::{AmmError, Result};

pub use crate::pools::ConstantProductPool;
pub use crate::registry::PoolRegistry;
