//! Risk Report Binary - one-shot headless catalog snapshot
//!
//! Generates a fresh asset catalog, runs pump-and-dump detection and
//! risk trend aggregation over every asset, and prints the result as
//! JSON on stdout.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin risk_report
//! ```
//!
//! ## Environment Variables
//!
//! - RUST_LOG - Logging level (optional, default: info)

use rugwatch::market::catalog::AssetCatalog;
use rugwatch::market::rng::ThreadRngSource;
use rugwatch::market::trend::{self, AssetSummary};
use serde::Serialize;

#[derive(Serialize)]
struct AssetReport {
    id: &'static str,
    name: &'static str,
    tier: &'static str,
    latest_price: f64,
    summary: AssetSummary,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("🚀 Generating risk report");

    let mut rng = ThreadRngSource::new();
    let catalog = AssetCatalog::generate(&mut rng);

    let reports: Vec<AssetReport> = catalog
        .all()
        .iter()
        .map(|asset| AssetReport {
            id: asset.id,
            name: asset.name,
            tier: asset.tier.as_str(),
            latest_price: asset.history.last().map(|p| p.price).unwrap_or_default(),
            summary: trend::summarize(asset.tier, &asset.history),
        })
        .collect();

    let flagged = reports
        .iter()
        .filter(|r| r.summary.detection.is_flagged())
        .count();
    log::info!("✅ {} assets scanned, {} flagged", reports.len(), flagged);

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
