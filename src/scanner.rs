//! Watchlist scanner producing a rolling top list of risky coins
//!
//! Every scan draws a fresh synthetic reading per symbol; a small
//! fraction of readings land in a pump state with elevated numbers
//! across every metric. The scan keeps the riskiest entries only.

use crate::market::rng::{RandomSource, ThreadRngSource};
use crate::state::DashboardState;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration};

/// Chance that a coin reads as pumping on any given scan
pub const PUMP_PROBABILITY: f64 = 0.05;

/// Exchanges a reading can be attributed to
pub const EXCHANGES: [&str; 3] = ["Binance", "Coinbase", "Kraken"];

/// Symbols covered by the scanner
pub const WATCHLIST: &[&str] = &[
    "BRD", "NEBL", "EDO", "ICN", "POLY", "PPT", "FUEL", "SNM", "TNT", "GRS", "BTS", "VITE",
    "GNT", "MDA", "REQ", "STORJ", "OAX", "CND", "VIBE", "SNGLS", "WINGS", "RDN", "PIVX", "DLT",
    "HC", "ONG", "EVX", "YOYOW", "VIB", "DATA", "GVT", "AST", "CHAT", "BNT", "IDEX", "VIA",
    "TNB", "NAS", "SNT", "ARDR", "DNT", "TCT", "RLC", "MOD", "STEEM", "NXS", "WABI", "DUSK",
    "SYS", "POWR", "ADX", "LUN", "AMB", "WPR", "POA", "CDT", "NULS", "STPT", "APPC", "CLOAK",
    "NAV", "QLC", "MITH", "BCD", "LRC", "OST", "MTH", "SUB", "BLZ", "ELF", "BCPT", "RCN",
    "INS", "CVC", "KMD", "DGD", "CTXC", "PNT", "REN",
];

/// One synthetic 24h reading for a watched symbol
#[derive(Debug, Clone, Serialize)]
pub struct ScannerReading {
    pub symbol: &'static str,
    pub price_change_24h: f64,
    pub volume_change_24h: f64,
    pub social_mentions: u32,
    pub risk_score: f64,
    pub exchange: &'static str,
}

/// Draw a reading for one symbol.
///
/// Pump-state readings draw from elevated ranges on every metric: price
/// change [20,100), volume change [200,1000), mentions [500,2000), risk
/// [80,100). Quiet readings draw [-5,5), [0,50), [0,100), [0,20).
pub fn read_symbol(rng: &mut dyn RandomSource, symbol: &'static str) -> ScannerReading {
    let pumping = rng.next_f64() < PUMP_PROBABILITY;

    let (price_change, volume_change, mentions, risk) = if pumping {
        (
            rng.range_f64(20.0, 100.0),
            rng.range_f64(200.0, 1000.0),
            rng.range_f64(500.0, 2000.0),
            rng.range_f64(80.0, 100.0),
        )
    } else {
        (
            rng.range_f64(-5.0, 5.0),
            rng.range_f64(0.0, 50.0),
            rng.range_f64(0.0, 100.0),
            rng.range_f64(0.0, 20.0),
        )
    };

    ScannerReading {
        symbol,
        price_change_24h: price_change,
        volume_change_24h: volume_change,
        social_mentions: mentions.floor() as u32,
        risk_score: risk,
        exchange: EXCHANGES[rng.range_u32(0, EXCHANGES.len() as u32 - 1) as usize],
    }
}

/// Scan the whole watchlist and keep the riskiest `top_n` readings,
/// sorted by risk score descending
pub fn scan(rng: &mut dyn RandomSource, top_n: usize) -> Vec<ScannerReading> {
    let mut readings: Vec<ScannerReading> = WATCHLIST
        .iter()
        .map(|&symbol| read_symbol(rng, symbol))
        .collect();

    readings.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    readings.truncate(top_n);
    readings
}

/// Periodic driver refreshing the dashboard's top list.
///
/// Runs until the owning task is aborted on shutdown.
pub async fn scanner_task(state: Arc<RwLock<DashboardState>>, interval_secs: u64, top_n: usize) {
    log::info!(
        "🔎 Watchlist scanner started ({} symbols, every {}s, top {})",
        WATCHLIST.len(),
        interval_secs,
        top_n
    );

    let mut timer = interval(Duration::from_secs(interval_secs.max(1)));

    loop {
        timer.tick().await;

        let mut guard = state.write().await;
        let mut rng = ThreadRngSource::new();
        let top = scan(&mut rng, top_n);
        log::debug!(
            "🔎 Scan complete, top risk: {}",
            top.first().map(|r| r.risk_score).unwrap_or(0.0)
        );
        guard.set_scanner_top(top);
    }
}
