//! Configuration for a constant-product pool.

use core::fmt;

use crate::domain::FeeRate;
use crate::error::AmmError;

/// What a non-initial deposit does with the amount beyond the binding ratio.
///
/// Minted LP is the same under both policies; only the amounts moved into
/// custody differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExcessPolicy {
    /// The full offered amounts enter the reserves.  Excess on the
    /// non-binding side is donated to existing LP holders.
    #[default]
    Absorb,
    /// Only the amount matching the binding ratio is taken on the
    /// non-binding side, rounded up; the rest is reported as a refund.
    Refund,
}

impl fmt::Display for ExcessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absorb => write!(f, "absorb"),
            Self::Refund => write!(f, "refund"),
        }
    }
}

/// Immutable parameters of a [`ConstantProductPool`](crate::pools::ConstantProductPool).
///
/// # Validation
///
/// - The fee fraction must have a non-zero denominator.
/// - The fee must be strictly below 100%.
///
/// # Examples
///
/// ```
/// use cpmm_core::config::{ExcessPolicy, PoolConfig};
/// use cpmm_core::domain::FeeRate;
///
/// let config = PoolConfig::default();
/// assert_eq!(config.fee_rate(), FeeRate::DEFAULT);
/// assert_eq!(config.excess_policy(), ExcessPolicy::Absorb);
///
/// let refunding = PoolConfig::new(FeeRate::new(1, 100).expect("1%"), ExcessPolicy::Refund)
///     .expect("valid config");
/// assert_eq!(refunding.fee_rate().numerator(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    fee_rate: FeeRate,
    #[cfg_attr(feature = "serde", serde(default))]
    excess_policy: ExcessPolicy,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee_rate` is unusable.
    pub fn new(fee_rate: FeeRate, excess_policy: ExcessPolicy) -> Result<Self, AmmError> {
        let config = Self {
            fee_rate,
            excess_policy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default fee with the given excess policy.
    #[must_use]
    pub const fn with_policy(excess_policy: ExcessPolicy) -> Self {
        Self {
            fee_rate: FeeRate::DEFAULT,
            excess_policy,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configurations bypass [`PoolConfig::new`], so pool
    /// constructors call this again.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee fraction is unusable.
    pub const fn validate(&self) -> Result<(), AmmError> {
        self.fee_rate.validate()
    }

    /// Fee charged on every swap input.
    #[must_use]
    pub const fn fee_rate(&self) -> FeeRate {
        self.fee_rate
    }

    /// Treatment of unmatched deposit amounts.
    #[must_use]
    pub const fn excess_policy(&self) -> ExcessPolicy {
        self.excess_policy
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolConfig(fee={}, excess={})", self.fee_rate, self.excess_policy)
    }
}
