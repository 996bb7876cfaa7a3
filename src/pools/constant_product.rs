//! Constant-product pool controller (`x * y = k`).
//!
//! The pool moves through two states: `Uninitialized` until
//! [`ConstantProductPool::initialize`] fixes its asset pair, then
//! `Active` for the rest of its life.  Even a fully drained pool stays
//! `Active` and can be funded again.
//!
//! Every mutating operation follows the same shape:
//!
//! 1. resolve the committed [`Reserves`] from the [`ReserveLedger`],
//! 2. hand them to [`pricing`] or [`accountant`] for the arithmetic,
//! 3. narrow outputs for the `u64` interface where one is used,
//! 4. commit the proposed state in a single [`ReserveLedger::commit`].
//!
//! Nothing is written before step 4, so a failing operation leaves the
//! pool exactly as it was.
//!
//! # Swap Algorithm (asset A in, asset B out)
//!
//! 1. `fee = floor(amount_in * fee_num / fee_den)`
//! 2. `net_input = amount_in - fee`
//! 3. `amount_out = reserve_b - floor(reserve_a * reserve_b / (reserve_a + net_input))`
//! 4. `reserve_a += amount_in` (fee stays in the pool)
//! 5. `reserve_b -= amount_out`

use tracing::info;

use crate::accountant;
use crate::config::PoolConfig;
use crate::domain::{
    Amount, AssetId, AssetPair, DepositReceipt, FeeRate, LpUnits, PoolId, Reserves, Side,
    SwapQuote, WithdrawalReceipt,
};
use crate::error::AmmError;
use crate::ledger::ReserveLedger;
use crate::math::CheckedArithmetic;
use crate::pricing;
use crate::traits::{LiquidityPool, SwapPool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PoolState {
    Uninitialized,
    Active(AssetPair),
}

/// A two-asset constant-product pool.
///
/// # State
///
/// - asset pair, fixed by [`initialize`](Self::initialize)
/// - `reserve_a` / `reserve_b` / `lp_supply`, held by a [`ReserveLedger`]
/// - `fees_accrued_a` / `fees_accrued_b`, lifetime fee counters in raw
///   asset units (informational; the fees themselves stay in reserves)
///
/// # Example
///
/// ```rust
/// use cpmm_core::config::PoolConfig;
/// use cpmm_core::domain::AssetId;
/// use cpmm_core::pools::ConstantProductPool;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
///
/// let mut pool = ConstantProductPool::new(PoolConfig::default()).expect("valid config");
/// pool.initialize(usdc, weth).expect("fresh pool");
///
/// let minted = pool.add_liquidity(1_000_000, 2_000_000).expect("first deposit");
/// assert_eq!(minted, 1_414_213);
///
/// let preview = pool.quote(100_000, &usdc).expect("priced");
/// let out = pool.swap(100_000, &usdc).expect("swapped");
/// assert_eq!(out, preview);
/// assert_eq!(out, 181_323);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    state: PoolState,
    config: PoolConfig,
    ledger: ReserveLedger,
    fees_accrued_a: Amount,
    fees_accrued_b: Amount,
}

impl Default for ConstantProductPool {
    fn default() -> Self {
        Self::blank(PoolConfig::default())
    }
}

impl ConstantProductPool {
    const fn blank(config: PoolConfig) -> Self {
        Self {
            state: PoolState::Uninitialized,
            config,
            ledger: ReserveLedger::new(),
            fees_accrued_a: Amount::ZERO,
            fees_accrued_b: Amount::ZERO,
        }
    }

    /// Creates an uninitialized pool.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`].
    pub fn new(config: PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self::blank(config))
    }

    /// Creates a pool and initializes it with `(asset_a, asset_b)`.
    ///
    /// # Errors
    ///
    /// - Propagates [`PoolConfig::validate`].
    /// - [`AmmError::InvalidAsset`] if the two assets are the same.
    pub fn open(asset_a: AssetId, asset_b: AssetId, config: PoolConfig) -> Result<Self, AmmError> {
        let mut pool = Self::new(config)?;
        pool.initialize(asset_a, asset_b)?;
        Ok(pool)
    }

    /// Rebuilds an active pool from persisted state.
    ///
    /// Fee counters start from zero.
    ///
    /// # Errors
    ///
    /// - Propagates [`PoolConfig::validate`].
    /// - [`AmmError::InvariantViolation`] if `reserves` is neither empty
    ///   nor fully funded.
    pub fn restore(pair: AssetPair, config: PoolConfig, reserves: Reserves) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            state: PoolState::Active(pair),
            config,
            ledger: ReserveLedger::restore(reserves)?,
            fees_accrued_a: Amount::ZERO,
            fees_accrued_b: Amount::ZERO,
        })
    }

    /// Fixes the asset pair and activates the pool with zero reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AlreadyInitialized`] if the pool is already active.
    /// - [`AmmError::InvalidAsset`] if the two assets are the same.
    pub fn initialize(&mut self, asset_a: AssetId, asset_b: AssetId) -> Result<PoolId, AmmError> {
        if self.is_initialized() {
            return Err(AmmError::AlreadyInitialized);
        }
        let pair = AssetPair::new(asset_a, asset_b)?;
        let id = PoolId::from_pair(&pair);

        self.state = PoolState::Active(pair);
        self.ledger = ReserveLedger::new();
        self.fees_accrued_a = Amount::ZERO;
        self.fees_accrued_b = Amount::ZERO;

        info!(pool = %id, config = %self.config, "pool initialized");
        Ok(id)
    }

    /// Whether [`initialize`](Self::initialize) has run.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        matches!(self.state, PoolState::Active(_))
    }

    /// Canonical identifier of the pool's asset pair.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`] before initialization.
    pub fn pool_id(&self) -> Result<PoolId, AmmError> {
        self.active_pair().map(|pair| PoolId::from_pair(&pair))
    }

    /// The configuration the pool was built with.
    #[must_use]
    pub const fn config(&self) -> PoolConfig {
        self.config
    }

    /// Lifetime fees retained on the asset A side.
    #[must_use]
    pub const fn fees_accrued_a(&self) -> Amount {
        self.fees_accrued_a
    }

    /// Lifetime fees retained on the asset B side.
    #[must_use]
    pub const fn fees_accrued_b(&self) -> Amount {
        self.fees_accrued_b
    }

    // -- u64 interface --------------------------------------------------------

    /// Deposits `(amount_a, amount_b)` and returns the LP units minted.
    ///
    /// # Errors
    ///
    /// As [`LiquidityPool::deposit`], plus [`AmmError::Overflow`] if the
    /// minted amount does not fit in `u64`.
    pub fn add_liquidity(&mut self, amount_a: u64, amount_b: u64) -> Result<u64, AmmError> {
        let receipt = self.plan_deposit(Amount::from_u64(amount_a), Amount::from_u64(amount_b))?;
        let minted = receipt.minted.to_u64()?;
        self.apply_deposit(&receipt)?;
        Ok(minted)
    }

    /// Burns `lp_amount` units and returns the amounts released.
    ///
    /// # Errors
    ///
    /// As [`LiquidityPool::withdraw`], plus [`AmmError::Overflow`] if
    /// either amount does not fit in `u64`.
    pub fn remove_liquidity(&mut self, lp_amount: u64) -> Result<(u64, u64), AmmError> {
        let receipt = self.plan_withdrawal(LpUnits::from_u64(lp_amount))?;
        let amounts = (receipt.amount_a.to_u64()?, receipt.amount_b.to_u64()?);
        self.apply_withdrawal(&receipt)?;
        Ok(amounts)
    }

    /// Sells `amount_in` of `input_asset` and returns the output amount.
    ///
    /// # Errors
    ///
    /// As [`SwapPool::swap_exact_in`], plus [`AmmError::Overflow`] if the
    /// output does not fit in `u64`.
    pub fn swap(&mut self, amount_in: u64, input_asset: &AssetId) -> Result<u64, AmmError> {
        let (side_in, quote) = self.plan_swap(Amount::from_u64(amount_in), input_asset)?;
        let amount_out = quote.amount_out().to_u64()?;
        self.apply_swap(side_in, &quote)?;
        Ok(amount_out)
    }

    /// Output [`swap`](Self::swap) would return now.  Never mutates.
    ///
    /// # Errors
    ///
    /// Same conditions as [`swap`](Self::swap).
    pub fn quote(&self, amount_in: u64, input_asset: &AssetId) -> Result<u64, AmmError> {
        let (_, quote) = self.plan_swap(Amount::from_u64(amount_in), input_asset)?;
        quote.amount_out().to_u64()
    }

    // -- planning -------------------------------------------------------------

    fn active_pair(&self) -> Result<AssetPair, AmmError> {
        match self.state {
            PoolState::Active(pair) => Ok(pair),
            PoolState::Uninitialized => Err(AmmError::NotInitialized),
        }
    }

    fn plan_deposit(&self, amount_a: Amount, amount_b: Amount) -> Result<DepositReceipt, AmmError> {
        self.active_pair()?;
        accountant::plan_deposit(
            &self.ledger.current(),
            amount_a,
            amount_b,
            self.config.excess_policy(),
        )
    }

    fn plan_withdrawal(&self, lp_amount: LpUnits) -> Result<WithdrawalReceipt, AmmError> {
        self.active_pair()?;
        accountant::plan_withdrawal(&self.ledger.current(), lp_amount)
    }

    fn plan_swap(&self, amount_in: Amount, asset_in: &AssetId) -> Result<(Side, SwapQuote), AmmError> {
        let side_in = self.active_pair()?.side_of(asset_in)?;
        let (reserve_in, reserve_out) = self.ledger.current().oriented(side_in);
        let quote = pricing::quote(reserve_in, reserve_out, amount_in, self.config.fee_rate())?;
        Ok((side_in, quote))
    }

    // -- commit ---------------------------------------------------------------

    fn apply_deposit(&mut self, receipt: &DepositReceipt) -> Result<(), AmmError> {
        self.ledger.commit(receipt.reserves_after)?;
        info!(
            pool = %self.log_id(),
            minted = %receipt.minted,
            reserves = %receipt.reserves_after,
            "liquidity added"
        );
        Ok(())
    }

    fn apply_withdrawal(&mut self, receipt: &WithdrawalReceipt) -> Result<(), AmmError> {
        self.ledger.commit(receipt.reserves_after)?;
        info!(
            pool = %self.log_id(),
            burned = %receipt.burned,
            reserves = %receipt.reserves_after,
            "liquidity removed"
        );
        Ok(())
    }

    fn apply_swap(&mut self, side_in: Side, quote: &SwapQuote) -> Result<(), AmmError> {
        let next = self.ledger.current().with_oriented(
            side_in,
            quote.reserve_in_after(),
            quote.reserve_out_after(),
        );
        // Counters are computed first so an overflow leaves nothing half-applied.
        let (fees_a, fees_b) = match side_in {
            Side::A => (self.fees_accrued_a.safe_add(&quote.fee())?, self.fees_accrued_b),
            Side::B => (self.fees_accrued_a, self.fees_accrued_b.safe_add(&quote.fee())?),
        };

        self.ledger.commit(next)?;
        self.fees_accrued_a = fees_a;
        self.fees_accrued_b = fees_b;

        info!(
            pool = %self.log_id(),
            side_in = %side_in,
            amount_in = %quote.amount_in(),
            amount_out = %quote.amount_out(),
            fee = %quote.fee(),
            reserves = %next,
            "swap committed"
        );
        Ok(())
    }

    fn log_id(&self) -> String {
        self.pool_id().map_or_else(|_| "uninitialized".to_owned(), |id| id.to_string())
    }
}

impl SwapPool for ConstantProductPool {
    /// Commits an exact-in swap and returns its full quote.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before initialization.
    /// - [`AmmError::InvalidAsset`] if `asset_in` is not one of the pair.
    /// - Any error from [`pricing::quote`].
    fn swap_exact_in(&mut self, amount_in: Amount, asset_in: &AssetId) -> Result<SwapQuote, AmmError> {
        let (side_in, quote) = self.plan_swap(amount_in, asset_in)?;
        self.apply_swap(side_in, &quote)?;
        Ok(quote)
    }

    fn preview_swap(&self, amount_in: Amount, asset_in: &AssetId) -> Result<SwapQuote, AmmError> {
        self.plan_swap(amount_in, asset_in).map(|(_, quote)| quote)
    }

    fn assets(&self) -> Result<AssetPair, AmmError> {
        self.active_pair()
    }

    fn fee_rate(&self) -> FeeRate {
        self.config.fee_rate()
    }
}

impl LiquidityPool for ConstantProductPool {
    fn deposit(&mut self, amount_a: Amount, amount_b: Amount) -> Result<DepositReceipt, AmmError> {
        let receipt = self.plan_deposit(amount_a, amount_b)?;
        self.apply_deposit(&receipt)?;
        Ok(receipt)
    }

    fn withdraw(&mut self, lp_amount: LpUnits) -> Result<WithdrawalReceipt, AmmError> {
        let receipt = self.plan_withdrawal(lp_amount)?;
        self.apply_withdrawal(&receipt)?;
        Ok(receipt)
    }

    fn lp_supply(&self) -> LpUnits {
        self.ledger.current().lp_supply
    }

    fn reserves(&self) -> Reserves {
        self.ledger.current()
    }
}
