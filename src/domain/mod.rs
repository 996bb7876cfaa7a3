//! Domain value types for the constant-product core.
//!
//! Newtypes keep asset amounts, LP units and asset identifiers apart at
//! the type level.  Constructors validate where a value can be invalid
//! (`AssetPair`, `FeeRate`) and are infallible otherwise.

mod amount;
mod asset_id;
mod asset_pair;
mod fee_rate;
mod liquidity;
mod pool_id;
mod receipts;
mod reserves;
mod rounding;
mod swap_result;

pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::{AssetPair, Side};
pub use fee_rate::FeeRate;
pub use liquidity::LpUnits;
pub use pool_id::PoolId;
pub use receipts::{DepositReceipt, WithdrawalReceipt};
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use swap_result::SwapQuote;
