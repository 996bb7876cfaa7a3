//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Swap conservation** - reserves move by exactly `amount_in` and
//!    `amount_out`; `k` never decreases.
//! 2. **Swap reversibility** - round-trip A -> B -> A returns at most the
//!    original input.
//! 3. **Preview fidelity** - a quote equals the swap it previews.
//! 4. **Fee monotonicity** - a larger input never pays a smaller fee.
//! 5. **Liquidity round-trip** - deposit then burn the same LP returns at
//!    most the deposit.
//! 6. **Full drain** - burning every outstanding unit empties the pool.
//! 7. **Proportional mint** - depositing half the reserves mints half
//!    the supply, rounded down.
//! 8. **Excess policy** - refund and absorb mint the same LP.

use proptest::prelude::*;

use crate::config::{ExcessPolicy, PoolConfig};
use crate::domain::{Amount, AssetId, LpUnits};
use crate::math::U256;
use crate::pools::ConstantProductPool;
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn make_pool(ra: u128, rb: u128, config: PoolConfig) -> ConstantProductPool {
    let Ok(mut pool) = ConstantProductPool::open(asset_a(), asset_b(), config) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.deposit(Amount::new(ra), Amount::new(rb)) else {
        panic!("valid first deposit");
    };
    pool
}

fn make_cp(ra: u128, rb: u128) -> ConstantProductPool {
    make_pool(ra, rb, PoolConfig::default())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Reserves whose product overflows `u128`.
fn wide_reserve_strategy() -> impl Strategy<Value = u128> {
    (1u128 << 80)..=(1u128 << 110)
}

fn input_strategy() -> impl Strategy<Value = u128> {
    1u128..=5_000_000u128
}

fn side_strategy() -> impl Strategy<Value = bool> {
    any::<bool>()
}

// ---------------------------------------------------------------------------
// Property 1: Swap conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_conservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in input_strategy(),
        a_in in side_strategy(),
    ) {
        let mut pool = make_cp(ra, rb);
        let before = pool.reserves();
        let asset_in = if a_in { asset_a() } else { asset_b() };

        let Ok(q) = pool.swap_exact_in(Amount::new(amount_in), &asset_in) else {
            prop_assert_eq!(pool.reserves(), before, "failed swap must not mutate");
            return Ok(());
        };
        let after = pool.reserves();
        let (rin, rout) = if a_in { (ra, rb) } else { (rb, ra) };
        let (rin_after, rout_after) = if a_in {
            (after.reserve_a.get(), after.reserve_b.get())
        } else {
            (after.reserve_b.get(), after.reserve_a.get())
        };

        prop_assert_eq!(rin_after, rin + amount_in);
        prop_assert_eq!(rout_after, rout - q.amount_out().get());
        prop_assert_eq!(after.lp_supply, before.lp_supply);
        prop_assert!(
            after.k() >= before.k(),
            "k decreased: before={} after={}",
            before.k(), after.k()
        );
    }

    #[test]
    fn prop_swap_conservation_wide_reserves(
        ra in wide_reserve_strategy(),
        rb in wide_reserve_strategy(),
        divisor in 2u128..=1_000u128,
    ) {
        let mut pool = make_cp(ra, rb);
        let before = pool.reserves();
        let Ok(q) = pool.swap_exact_in(Amount::new(ra / divisor), &asset_a()) else {
            return Ok(());
        };
        let after = pool.reserves();
        prop_assert_eq!(after.reserve_a.get(), ra + ra / divisor);
        prop_assert_eq!(after.reserve_b.get(), rb - q.amount_out().get());
        prop_assert!(after.k() >= before.k());
        prop_assert!(U256::full_mul(ra, rb) <= after.k());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let mut pool = make_cp(ra, rb);

        let Ok(ab) = pool.swap_exact_in(Amount::new(swap_in), &asset_a()) else {
            return Ok(());
        };
        let Ok(ba) = pool.swap_exact_in(ab.amount_out(), &asset_b()) else {
            return Ok(());
        };
        let final_a = ba.amount_out().get();

        prop_assert!(
            final_a <= swap_in,
            "round-trip should lose value: final={} > original={}",
            final_a, swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3 and 4: Preview fidelity, fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_preview_matches_swap(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in input_strategy(),
    ) {
        let mut pool = make_cp(ra, rb);
        let preview = pool.preview_swap(Amount::new(amount_in), &asset_b());
        let committed = pool.swap_exact_in(Amount::new(amount_in), &asset_b());
        prop_assert_eq!(preview, committed);
    }

    #[test]
    fn prop_fee_monotonicity(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        small in input_strategy(),
        extra in 0u128..=1_000_000u128,
    ) {
        let pool = make_cp(ra, rb);
        let large = small + extra;
        let (Ok(q_small), Ok(q_large)) = (
            pool.preview_swap(Amount::new(small), &asset_a()),
            pool.preview_swap(Amount::new(large), &asset_a()),
        ) else {
            return Ok(());
        };
        prop_assert!(q_large.fee() >= q_small.fee());
        prop_assert!(q_large.amount_out() >= q_small.amount_out());
    }
}

// ---------------------------------------------------------------------------
// Property 5 and 6: Liquidity round-trip, full drain
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_liquidity_round_trip(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        add_a in 1u128..=1_000_000u128,
        add_b in 1u128..=1_000_000u128,
        swap_in in 0u128..=100_000u128,
    ) {
        let mut pool = make_cp(ra, rb);
        if swap_in > 0 {
            let _ = pool.swap_exact_in(Amount::new(swap_in), &asset_a());
        }

        let Ok(deposit) = pool.deposit(Amount::new(add_a), Amount::new(add_b)) else {
            return Ok(());
        };
        let Ok(withdrawal) = pool.withdraw(deposit.minted) else {
            panic!("burning freshly minted units must succeed");
        };

        prop_assert!(withdrawal.amount_a.get() <= add_a);
        prop_assert!(withdrawal.amount_b.get() <= add_b);
    }

    #[test]
    fn prop_full_drain(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        second in 1u128..=100u128,
        swap_in in 1u128..=100_000u128,
    ) {
        let mut pool = make_cp(ra, rb);
        let first_lp = pool.lp_supply();

        let (add_a, add_b) = (ra * second / 10 + 1, rb * second / 10 + 1);
        let Ok(deposit) = pool.deposit(Amount::new(add_a), Amount::new(add_b)) else {
            return Ok(());
        };
        let _ = pool.swap_exact_in(Amount::new(swap_in), &asset_b());

        let Ok(_) = pool.withdraw(first_lp) else {
            panic!("first holder burn");
        };
        let Ok(_) = pool.withdraw(deposit.minted) else {
            panic!("second holder burn");
        };

        prop_assert_eq!(pool.lp_supply(), LpUnits::ZERO);
        prop_assert!(pool.reserves().is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property 7 and 8: Proportional mint, excess policy
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_proportional_half_mint(
        half_a in 5_000u128..=5_000_000u128,
        half_b in 5_000u128..=5_000_000u128,
    ) {
        let mut pool = make_cp(half_a * 2, half_b * 2);
        let supply = pool.lp_supply().get();
        let before = pool.reserves();

        let Ok(deposit) = pool.deposit(Amount::new(half_a), Amount::new(half_b)) else {
            panic!("proportional deposit must mint");
        };
        prop_assert_eq!(deposit.minted.get(), supply / 2);

        // The reserve ratio is exactly preserved.
        let after = pool.reserves();
        prop_assert_eq!(
            U256::full_mul(after.reserve_a.get(), before.reserve_b.get()),
            U256::full_mul(after.reserve_b.get(), before.reserve_a.get())
        );
    }

    #[test]
    fn prop_refund_mints_like_absorb(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        add_a in 1u128..=1_000_000u128,
        add_b in 1u128..=1_000_000u128,
    ) {
        let mut absorb = make_pool(ra, rb, PoolConfig::with_policy(ExcessPolicy::Absorb));
        let mut refund = make_pool(ra, rb, PoolConfig::with_policy(ExcessPolicy::Refund));

        let absorbed = absorb.deposit(Amount::new(add_a), Amount::new(add_b));
        let refunded = refund.deposit(Amount::new(add_a), Amount::new(add_b));
        let (absorbed, refunded) = match (absorbed, refunded) {
            (Ok(absorbed), Ok(refunded)) => (absorbed, refunded),
            (absorbed, refunded) => {
                prop_assert_eq!(absorbed.err(), refunded.err());
                return Ok(());
            }
        };

        prop_assert_eq!(absorbed.minted, refunded.minted);
        prop_assert_eq!(refunded.used_a.get() + refunded.refund_a.get(), add_a);
        prop_assert_eq!(refunded.used_b.get() + refunded.refund_b.get(), add_b);
        prop_assert!(refunded.refund_a.is_zero() || refunded.refund_b.is_zero());
    }
}
