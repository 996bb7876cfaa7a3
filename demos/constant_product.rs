//! Constant-product pool walkthrough (`x * y = k`).
//!
//! Registers a pool, funds it from two providers, trades against it in
//! both directions, then burns every LP unit back out.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use cpmm_core::config::{ExcessPolicy, PoolConfig};
use cpmm_core::domain::{Amount, AssetId, FeeRate};
use cpmm_core::registry::PoolRegistry;
use cpmm_core::traits::{LiquidityPool, SwapPool};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product Pool (x * y = k) ===\n");

    // ── 1. Define assets ────────────────────────────────────────────────
    let usdc = AssetId::from_bytes([1u8; 32]);
    let weth = AssetId::from_bytes([2u8; 32]);
    println!("Asset A (USDC): {usdc}");
    println!("Asset B (WETH): {weth}");

    // ── 2. Register a pool with a 0.30% fee that refunds excess ─────────
    let config = PoolConfig::new(FeeRate::new(3, 1_000)?, ExcessPolicy::Refund)?;
    let mut registry = PoolRegistry::new(config)?;
    let id = registry.create(usdc, weth)?;
    println!("\nRegistered pool {id} with {config}");

    let pool = registry.pool_mut(&id)?;

    // ── 3. First provider funds the pool ────────────────────────────────
    let alice = pool.add_liquidity(1_000_000, 2_000_000)?;
    println!("\n--- Alice deposits 1 000 000 A + 2 000 000 B ---");
    println!("  LP minted:   {alice}");
    println!("  Reserves:    {}", pool.reserves());

    // ── 4. Second provider over-supplies B; the excess is refunded ──────
    let bob = pool.deposit(Amount::new(250_000), Amount::new(600_000))?;
    println!("\n--- Bob offers 250 000 A + 600 000 B ---");
    println!("  {bob}");
    println!("  Reserves:    {}", pool.reserves());

    // ── 5. Preview and execute a swap: sell 100 000 USDC ────────────────
    let preview = pool.quote(100_000, &usdc)?;
    let quote = pool.swap_exact_in(Amount::new(100_000), &usdc)?;
    println!("\n--- Swap: sell 100 000 A ---");
    println!("  Previewed:   {preview}");
    println!("  Executed:    {quote}");
    println!("  Reserves:    {}", pool.reserves());

    // ── 6. Swap back the other way ──────────────────────────────────────
    let back = pool.swap(u64::try_from(quote.amount_out().get())?, &weth)?;
    println!("\n--- Swap: sell {} B ---", quote.amount_out());
    println!("  Received:    {back} A (round trip loses to fees)");
    println!("  Fees kept:   A={} B={}", pool.fees_accrued_a(), pool.fees_accrued_b());

    // ── 7. Everyone leaves ──────────────────────────────────────────────
    let (alice_a, alice_b) = pool.remove_liquidity(alice)?;
    let bob_out = pool.withdraw(bob.minted)?;
    println!("\n--- Remove Liquidity ---");
    println!("  Alice:       {alice_a} A + {alice_b} B");
    println!("  Bob:         {bob_out}");
    println!("  Reserves:    {}", pool.reserves());
    println!("  LP supply:   {}", pool.lp_supply());

    println!("\n=== Done ===");
    Ok(())
}
