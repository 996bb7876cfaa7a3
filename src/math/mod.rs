//! Integer arithmetic for AMM calculations.
//!
//! Nothing in this crate uses floating point.  Products of two
//! reserve-sized values go through [`U256`]; every overflow is an error.
//!
//! Every division states its rounding direction, always in favour of
//! the pool:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`](crate::domain::Rounding::Down) |
//! | Swap fee | [`Rounding::Down`](crate::domain::Rounding::Down) (never above the nominal rate) |
//! | LP minted | [`Rounding::Down`](crate::domain::Rounding::Down) |
//! | Withdrawal amounts | [`Rounding::Down`](crate::domain::Rounding::Down) |
//! | Amount charged on the non-binding side of a refunded deposit | [`Rounding::Up`](crate::domain::Rounding::Up) |

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{mul_div, sqrt_product, U256};
