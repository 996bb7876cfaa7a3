//! Pool implementations.
//!
//! | Pool | Invariant |
//! |------|-----------|
//! | [`ConstantProductPool`] | `reserve_a * reserve_b = k`, non-decreasing across swaps |

pub mod constant_product;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
