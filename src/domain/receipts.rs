//! Results of liquidity operations handed back to the custody layer.

use core::fmt;

use super::{Amount, LpUnits, Reserves};

/// What a deposit did: LP minted, the amounts pulled into custody, any
/// amount left with the depositor, and the resulting ledger state.
///
/// Under [`ExcessPolicy::Absorb`](crate::config::ExcessPolicy::Absorb) the
/// refunds are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositReceipt {
    /// LP units to credit to the depositor.
    pub minted: LpUnits,
    /// Amount of asset A moved into the pool.
    pub used_a: Amount,
    /// Amount of asset B moved into the pool.
    pub used_b: Amount,
    /// Offered asset A that is not taken.
    pub refund_a: Amount,
    /// Offered asset B that is not taken.
    pub refund_b: Amount,
    /// Ledger state after the deposit.
    pub reserves_after: Reserves,
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(minted={}, used=({}, {}), refund=({}, {}))",
            self.minted, self.used_a, self.used_b, self.refund_a, self.refund_b
        )
    }
}

/// What a withdrawal did: LP burned, amounts to release, resulting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalReceipt {
    /// LP units burned from the holder.
    pub burned: LpUnits,
    /// Amount of asset A released to the holder.
    pub amount_a: Amount,
    /// Amount of asset B released to the holder.
    pub amount_b: Amount,
    /// Ledger state after the withdrawal.
    pub reserves_after: Reserves,
}

impl fmt::Display for WithdrawalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(burned={}, out=({}, {}))",
            self.burned, self.amount_a, self.amount_b
        )
    }
}
