//! Trait seams between pools and their callers.
//!
//! [`SwapPool`] covers trading and [`LiquidityPool`] adds deposits and
//! burns.  The registry and the custody layer talk to pools through
//! these traits.

mod liquidity_pool;
mod swap_pool;

pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
