//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a pool is built from: the
//! swap fee and the [`ExcessPolicy`] for unmatched deposit amounts.  It is
//! validated on construction and again by every pool constructor.

mod pool_config;

pub use pool_config::{ExcessPolicy, PoolConfig};
