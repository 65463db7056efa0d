//! Built-in gatherers and composition example.
//!
//! Demonstrates:
//! - Fixed and sliding windows over sensor readings
//! - Running totals with Scan and a final total with Fold
//! - Grouping consecutive duplicates
//! - Short-circuiting an infinite source
//! - Running many independent inputs in parallel
//!
//! Run with: `cargo run --example gatherers_showcase`
//! Set `RUST_LOG=debug` to see run lifecycle events.

use anyhow::Result;
use gatherbeam::*;
use tracing_subscriber::EnvFilter;

#[allow(clippy::cast_precision_loss)]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Gatherers Showcase\n");

    let readings = vec![21.5, 22.0, 22.4, 23.1, 22.8, 22.9, 24.0];

    // Smooth readings with a moving average of three
    let smoothed = SlidingWindow::new(3)?
        .and_then(Map::new(|w: Vec<f64>| w.iter().sum::<f64>() / w.len() as f64));
    println!("Moving averages:");
    for avg in run(&smoothed, readings.clone())? {
        println!("  {avg:.2}");
    }

    // Batch readings in groups of two
    let batches = run(FixedWindow::new(2)?, readings.clone())?;
    println!("\nBatches of two: {batches:?}");

    // Running and final totals
    let deltas = vec![5, -2, 7, -1, 3];
    let balance = run(Scan::new(100, |a: i32, x: i32| a + x), deltas.clone())?;
    let closing = run(Fold::new(100, |a: i32, x: i32| a + x), deltas)?;
    println!("\nBalance over time: {balance:?} (closing: {closing:?})");

    // Collapse repeated statuses
    let statuses = ["ok", "ok", "warn", "warn", "warn", "ok", "down"];
    let runs = run(ConsecutiveGroup, statuses)?;
    println!("\nStatus runs:");
    for group in &runs {
        println!("  {} x{}", group[0], group.len());
    }

    // First five powers of two above 1000, from an infinite source
    let big: Vec<u64> = (0u32..)
        .map(|e| 2u64.pow(e))
        .gather(Filter::new(|x: &u64| *x > 1000).and_then(Limit::new(5)))
        .collect::<Result<_>>()?;
    println!("\nPowers of two above 1000: {big:?}");

    // Same descriptor, many independent inputs
    let days = vec![vec![3, 3, 1], vec![], vec![4, 4, 4, 2, 2]];
    let grouped = Runner::default().run_many(&ConsecutiveGroup, days)?;
    println!("\nDaily groups: {grouped:?}");

    Ok(())
}
