//! Unified error type for the constant-product core.
//!
//! Every fallible operation in the crate returns [`AmmError`].  All errors
//! are detected before any state is committed, so a returned error always
//! means the pool is exactly as it was before the call.

use thiserror::Error;

/// Errors produced by the pool controller, the pricing engine, the
/// liquidity accountant and the reserve ledger.
///
/// `Overflow` and `InvariantViolation` indicate a logic or configuration
/// bug; callers should abort the enclosing transaction on them rather than
/// retry.  Every other variant is a rejected request that may be retried
/// with different parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmmError {
    /// `initialize` was called on a pool that is already active, or a pool
    /// for the same asset pair already exists in a registry.
    #[error("pool is already initialized")]
    AlreadyInitialized,

    /// An operation other than `initialize` was called on an uninitialized
    /// pool, or the requested pool id is unknown.
    #[error("pool is not initialized")]
    NotInitialized,

    /// The input asset id is not one of the pool's two assets, or the two
    /// assets given to `initialize` are identical.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A deposit or swap amount was zero.
    #[error("amount must be positive")]
    AmountMustBePositive,

    /// A deposit is too small relative to the reserves to mint a whole LP unit.
    #[error("deposit would mint zero liquidity")]
    ZeroLiquidityMinted,

    /// The LP amount to burn is zero or exceeds the outstanding supply.
    #[error("invalid burn amount")]
    InvalidBurnAmount,

    /// The swap would drain the output reserve or produce no output.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A value left its representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A proposed ledger state breaks a pool invariant.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// The fee configuration is unusable.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),
}

impl AmmError {
    /// Returns `true` for errors that signal a bug rather than a rejected
    /// request.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Overflow(_) | Self::InvariantViolation(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
