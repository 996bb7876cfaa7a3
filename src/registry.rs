//! Pool lookup table keyed by [`PoolId`].
//!
//! A host service owns one [`PoolRegistry`] and passes pools to callers
//! by reference.  There is no global state: a caller that only ever
//! manages one pool can hold a [`ConstantProductPool`] directly.

use std::collections::HashMap;

use tracing::info;

use crate::config::PoolConfig;
use crate::domain::{AssetId, PoolId};
use crate::error::AmmError;
use crate::pools::ConstantProductPool;

/// Owner of every pool a service knows about, one per asset pair.
///
/// The pair order does not matter for lookup: `(x, y)` and `(y, x)`
/// share one [`PoolId`].
///
/// # Example
///
/// ```rust
/// use cpmm_core::domain::{AssetId, PoolId};
/// use cpmm_core::registry::PoolRegistry;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
///
/// let mut registry = PoolRegistry::default();
/// let id = registry.create(usdc, weth).expect("new pair");
/// assert_eq!(id, PoolId::from_assets(weth, usdc));
///
/// let pool = registry.pool_mut(&id).expect("registered");
/// pool.add_liquidity(1_000, 4_000).expect("funded");
/// assert!(registry.create(weth, usdc).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PoolRegistry {
    pools: HashMap<PoolId, ConstantProductPool>,
    default_config: PoolConfig,
}

impl PoolRegistry {
    /// An empty registry whose pools use `default_config` unless told
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`].
    pub fn new(default_config: PoolConfig) -> Result<Self, AmmError> {
        default_config.validate()?;
        Ok(Self {
            pools: HashMap::new(),
            default_config,
        })
    }

    /// Creates and initializes a pool for `(asset_a, asset_b)` with the
    /// registry's default configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AlreadyInitialized`] if the pair already has a pool.
    /// - [`AmmError::InvalidAsset`] if the two assets are the same.
    pub fn create(&mut self, asset_a: AssetId, asset_b: AssetId) -> Result<PoolId, AmmError> {
        self.create_with(asset_a, asset_b, self.default_config)
    }

    /// Creates and initializes a pool with an explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`create`](Self::create), plus [`PoolConfig::validate`].
    pub fn create_with(
        &mut self,
        asset_a: AssetId,
        asset_b: AssetId,
        config: PoolConfig,
    ) -> Result<PoolId, AmmError> {
        let id = PoolId::from_assets(asset_a, asset_b);
        if self.pools.contains_key(&id) {
            return Err(AmmError::AlreadyInitialized);
        }
        let pool = ConstantProductPool::open(asset_a, asset_b, config)?;
        self.pools.insert(id, pool);
        info!(pool = %id, total = self.pools.len(), "pool registered");
        Ok(id)
    }

    /// Shared access to a registered pool.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`] if no pool has that id.
    pub fn pool(&self, id: &PoolId) -> Result<&ConstantProductPool, AmmError> {
        self.pools.get(id).ok_or(AmmError::NotInitialized)
    }

    /// Exclusive access to a registered pool.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`] if no pool has that id.
    pub fn pool_mut(&mut self, id: &PoolId) -> Result<&mut ConstantProductPool, AmmError> {
        self.pools.get_mut(id).ok_or(AmmError::NotInitialized)
    }

    /// Pool for an asset pair, in either order.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`] if the pair has no pool.
    pub fn find(&self, x: AssetId, y: AssetId) -> Result<&ConstantProductPool, AmmError> {
        self.pool(&PoolId::from_assets(x, y))
    }

    /// Whether the id is registered.
    #[must_use]
    pub fn contains(&self, id: &PoolId) -> bool {
        self.pools.contains_key(id)
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Whether no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Iterates over `(id, pool)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&PoolId, &ConstantProductPool)> {
        self.pools.iter()
    }

    /// Configuration used by [`create`](Self::create).
    #[must_use]
    pub const fn default_config(&self) -> PoolConfig {
        self.default_config
    }
}
