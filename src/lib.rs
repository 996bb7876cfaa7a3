//! # cpmm-core
//!
//! Integer core of a two-asset constant-product automated market maker.
//!
//! The crate prices swaps, mints and burns LP units, and keeps the
//! reserve state consistent.  Custody of the assets, per-holder LP
//! balances, authentication and persistence belong to the caller; every
//! operation hands back exactly what that caller has to move.
//!
//! - **Reserve ledger** - the committed `(reserve_a, reserve_b, lp_supply)`
//!   and the invariants every commit must keep.
//! - **Pricing** - exact-in swap output under a fee, `x * y = k`.
//! - **Accountant** - LP minted on deposit, amounts paid on burn.
//! - **Pool controller** - the `Uninitialized -> Active` state machine
//!   that ties the three together and commits atomically.
//!
//! All arithmetic is integer-only.  Products of two reserves use a 256-bit
//! intermediate, every division rounds in favour of the pool, and every
//! overflow is an error rather than a wrap.
//!
//! # Quick Start
//!
//! ```rust
//! use cpmm_core::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//!
//! // 1. Create and initialize a pool with the default 0.3% fee
//! let mut pool = ConstantProductPool::default();
//! let id = pool.initialize(usdc, weth).expect("fresh pool");
//!
//! // 2. Fund it; the first deposit mints sqrt(a * b)
//! let lp = pool.add_liquidity(1_000_000, 2_000_000).expect("funded");
//! assert_eq!(lp, 1_414_213);
//!
//! // 3. Preview, then swap 100 000 units of USDC for WETH
//! let out = pool.quote(100_000, &usdc).expect("priced");
//! assert_eq!(pool.swap(100_000, &usdc), Ok(out));
//!
//! // 4. Burn everything back out
//! let (a, b) = pool.remove_liquidity(lp).expect("burned");
//! assert_eq!(a, 1_100_000);
//! assert_eq!(b, 2_000_000 - out);
//! assert_eq!(pool.pool_id(), Ok(id));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for configuration and value types |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber:
//! `debug` for every priced quote and planned deposit or withdrawal,
//! `info` for committed transitions, `warn` when the ledger refuses a
//! commit.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`LpUnits`](domain::LpUnits), [`AssetId`](domain::AssetId), receipts |
//! | [`math`] | Checked arithmetic, [`U256`](math::U256) intermediates, rounding |
//! | [`ledger`] | [`ReserveLedger`](ledger::ReserveLedger) and its invariants |
//! | [`pricing`] | [`quote`](pricing::quote) for exact-in swaps |
//! | [`accountant`] | LP minting and burn payouts |
//! | [`pools`] | [`ConstantProductPool`](pools::ConstantProductPool) controller |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), [`ExcessPolicy`](config::ExcessPolicy) |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) keyed by [`PoolId`](domain::PoolId) |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod accountant;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod pricing;
pub mod registry;
pub mod traits;
