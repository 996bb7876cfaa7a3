//! Integration tests exercising the full system through the public API.
//!
//! These tests cover the end-to-end flows a host service drives:
//! registry round-trip, the trading lifecycle, the reference quote,
//! excess-deposit policies, and failure atomicity.

#![allow(clippy::panic)]

use cpmm_core::config::{ExcessPolicy, PoolConfig};
use cpmm_core::domain::{Amount, AssetId, AssetPair, FeeRate, LpUnits, PoolId, Reserves};
use cpmm_core::error::AmmError;
use cpmm_core::pools::ConstantProductPool;
use cpmm_core::pricing;
use cpmm_core::registry::PoolRegistry;
use cpmm_core::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn usdc() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn weth() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn dai() -> AssetId {
    AssetId::from_bytes([3u8; 32])
}

fn active_pool() -> ConstantProductPool {
    let mut pool = ConstantProductPool::default();
    let Ok(_) = pool.initialize(usdc(), weth()) else {
        panic!("fresh pool");
    };
    pool
}

fn reserves(a: u128, b: u128, lp: u128) -> Reserves {
    Reserves::new(Amount::new(a), Amount::new(b), LpUnits::new(lp))
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn full_trading_lifecycle() {
    let mut pool = active_pool();

    // Alice funds the pool.
    let Ok(alice) = pool.add_liquidity(1_000_000, 2_000_000) else {
        panic!("first deposit");
    };
    assert_eq!(alice, 1_414_213);

    // Bob joins with exactly half the reserves.
    let Ok(bob) = pool.add_liquidity(500_000, 1_000_000) else {
        panic!("second deposit");
    };
    assert_eq!(bob, alice / 2);

    // Traders move the price both ways.
    let Ok(out_b) = pool.swap(150_000, &usdc()) else {
        panic!("swap A->B");
    };
    let Ok(out_a) = pool.swap(out_b, &weth()) else {
        panic!("swap B->A");
    };
    assert!(out_a < 150_000, "round trip must lose value to fees");
    assert!(pool.fees_accrued_a() > Amount::ZERO);
    assert!(pool.fees_accrued_b() > Amount::ZERO);

    // Both leave; the pool is empty but still usable.
    let Ok((alice_a, alice_b)) = pool.remove_liquidity(alice) else {
        panic!("alice burn");
    };
    let Ok((bob_a, bob_b)) = pool.remove_liquidity(bob) else {
        panic!("bob burn");
    };
    assert!(pool.reserves().is_empty());
    assert_eq!(pool.lp_supply(), LpUnits::ZERO);

    // Fees stayed in the pool, so LPs leave with more value than they put in
    // on at least one side.
    assert!(alice_a + bob_a > 1_500_000 || alice_b + bob_b > 3_000_000);

    assert_eq!(pool.add_liquidity(100, 400), Ok(200));
}

#[test]
fn operations_before_initialize_fail() {
    let mut pool = ConstantProductPool::default();
    assert_eq!(pool.add_liquidity(1, 1), Err(AmmError::NotInitialized));
    assert_eq!(pool.remove_liquidity(1), Err(AmmError::NotInitialized));
    assert_eq!(pool.swap(1, &usdc()), Err(AmmError::NotInitialized));
    assert_eq!(pool.quote(1, &usdc()), Err(AmmError::NotInitialized));

    let Ok(_) = pool.initialize(usdc(), weth()) else {
        panic!("fresh pool");
    };
    assert_eq!(pool.initialize(usdc(), dai()), Err(AmmError::AlreadyInitialized));
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[test]
fn reference_quote_through_every_surface() {
    let expected = 2_000_000 - 2_000_000_000_000u128 / 1_099_700;

    let Ok(q) = pricing::quote_with_fee(
        Amount::new(1_000_000),
        Amount::new(2_000_000),
        Amount::new(100_000),
        3,
        1_000,
    ) else {
        panic!("pure quote");
    };
    assert_eq!(q.fee(), Amount::new(300));
    assert_eq!(q.amount_in_after_fee(), Amount::new(99_700));
    assert_eq!(q.amount_out(), Amount::new(expected));

    let mut pool = active_pool();
    let Ok(_) = pool.add_liquidity(1_000_000, 2_000_000) else {
        panic!("funded");
    };
    let Ok(preview) = pool.preview_swap(Amount::new(100_000), &usdc()) else {
        panic!("preview");
    };
    assert_eq!(preview, q);
    assert_eq!(pool.quote(100_000, &usdc()), Ok(181_323));
    assert_eq!(pool.swap(100_000, &usdc()), Ok(181_323));
    assert_eq!(pool.reserves(), reserves(1_100_000, 2_000_000 - expected, 1_414_213));
}

#[test]
fn zero_fee_pool_never_loses_k() {
    let Ok(config) = PoolConfig::new(FeeRate::ZERO, ExcessPolicy::Absorb) else {
        panic!("valid config");
    };
    let Ok(mut pool) = ConstantProductPool::open(usdc(), weth(), config) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(1_000_003, 999_983) else {
        panic!("funded");
    };
    let mut k = pool.reserves().k();
    for amount in [1, 7, 333, 10_001, 250_000] {
        for asset in [usdc(), weth()] {
            if pool.swap(amount, &asset).is_ok() {
                let next = pool.reserves().k();
                assert!(next >= k);
                k = next;
            }
        }
    }
    assert_eq!(pool.fees_accrued_a(), Amount::ZERO);
}

#[test]
fn draining_and_foreign_swaps_leave_state_untouched() {
    let mut pool = active_pool();
    let Ok(_) = pool.add_liquidity(1_000, 1_000) else {
        panic!("funded");
    };
    let before = pool.clone();
    assert_eq!(pool.swap(u64::MAX, &usdc()), Err(AmmError::InsufficientLiquidity));
    assert!(matches!(pool.swap(10, &dai()), Err(AmmError::InvalidAsset(_))));
    assert_eq!(pool.swap(0, &weth()), Err(AmmError::AmountMustBePositive));
    assert_eq!(pool, before);
}

// ---------------------------------------------------------------------------
// Liquidity
// ---------------------------------------------------------------------------

#[test]
fn round_trip_returns_at_most_the_deposit() {
    let mut pool = active_pool();
    let Ok(_) = pool.add_liquidity(1_000_000, 3_000_000) else {
        panic!("funded");
    };
    let Ok(_) = pool.swap(12_345, &weth()) else {
        panic!("swap");
    };
    let Ok(minted) = pool.add_liquidity(77_777, 250_000) else {
        panic!("deposit");
    };
    let Ok((a, b)) = pool.remove_liquidity(minted) else {
        panic!("burn");
    };
    assert!(a <= 77_777);
    assert!(b <= 250_000);
}

#[test]
fn absorb_and_refund_mint_the_same() {
    let mut absorbing = active_pool();
    let Ok(mut refunding) =
        ConstantProductPool::open(usdc(), weth(), PoolConfig::with_policy(ExcessPolicy::Refund))
    else {
        panic!("valid pool");
    };
    for pool in [&mut absorbing, &mut refunding] {
        let Ok(_) = pool.add_liquidity(1_000, 2_000) else {
            panic!("funded");
        };
    }

    let (Ok(absorbed), Ok(refunded)) = (
        absorbing.deposit(Amount::new(100), Amount::new(500)),
        refunding.deposit(Amount::new(100), Amount::new(500)),
    ) else {
        panic!("deposits");
    };
    assert_eq!(absorbed.minted, refunded.minted);
    assert_eq!(absorbed.reserves_after.reserve_b, Amount::new(2_500));
    assert_eq!(refunded.used_b, Amount::new(200));
    assert_eq!(refunded.refund_b, Amount::new(300));
    assert_eq!(refunding.reserves(), reserves(1_100, 2_200, 1_414 + 141));
}

#[test]
fn burn_limits() {
    let mut pool = active_pool();
    let Ok(lp) = pool.add_liquidity(10_000, 10_000) else {
        panic!("funded");
    };
    assert_eq!(pool.remove_liquidity(0), Err(AmmError::InvalidBurnAmount));
    assert_eq!(pool.remove_liquidity(lp + 1), Err(AmmError::InvalidBurnAmount));
    assert_eq!(pool.add_liquidity(0, 5), Err(AmmError::AmountMustBePositive));
    assert_eq!(pool.add_liquidity(1, 1), Ok(1));
}

#[test]
fn dust_deposit_rejected() {
    let mut pool = active_pool();
    let Ok(_) = pool.add_liquidity(10_000_000, 10_000_000) else {
        panic!("funded");
    };
    let Ok(_) = pool.swap(5_000_000, &usdc()) else {
        panic!("swap");
    };
    // 1 unit of A is worth less than one LP unit after the price moved.
    assert_eq!(pool.add_liquidity(1, 1), Err(AmmError::ZeroLiquidityMinted));
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn registry_round_trip() {
    let mut registry = PoolRegistry::default();
    let Ok(usdc_weth) = registry.create(usdc(), weth()) else {
        panic!("first pair");
    };
    let Ok(dai_usdc) = registry.create(dai(), usdc()) else {
        panic!("second pair");
    };
    assert_ne!(usdc_weth, dai_usdc);
    assert_eq!(registry.create(weth(), usdc()), Err(AmmError::AlreadyInitialized));

    let Ok(pool) = registry.pool_mut(&usdc_weth) else {
        panic!("registered");
    };
    let Ok(_) = pool.add_liquidity(1_000_000, 1_000_000) else {
        panic!("funded");
    };
    let Ok(_) = pool.swap(1_000, &weth()) else {
        panic!("swap");
    };

    let Ok(found) = registry.find(weth(), usdc()) else {
        panic!("lookup in either order");
    };
    assert_eq!(found.reserves().reserve_b, Amount::new(1_001_000));
    assert_eq!(
        registry.pool(&PoolId::from_assets(dai(), weth())).err(),
        Some(AmmError::NotInitialized)
    );
}

#[test]
fn restored_pool_continues_from_snapshot() {
    let mut original = active_pool();
    let Ok(_) = original.add_liquidity(40_000, 90_000) else {
        panic!("funded");
    };
    let Ok(pair) = AssetPair::new(usdc(), weth()) else {
        panic!("distinct");
    };
    let Ok(mut restored) = ConstantProductPool::restore(pair, original.config(), original.reserves()) else {
        panic!("valid snapshot");
    };
    assert_eq!(original.swap(5_000, &usdc()), restored.swap(5_000, &usdc()));
    assert_eq!(original.reserves(), restored.reserves());
}
