use std::env;

/// Configuration loaded from environment variables
///
/// Every variable is optional; the defaults match the reference
/// deployment (60-sample window, one-minute ticks, 3-second scans).
pub struct Config {
    pub live_window_capacity: usize,
    pub live_tick_secs: u64,
    pub scan_interval_secs: u64,
    pub scan_top_n: usize,
    pub rust_log: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            live_window_capacity: env_or("LIVE_WINDOW_CAPACITY", 60),
            live_tick_secs: env_or("LIVE_TICK_SECS", 60),
            scan_interval_secs: env_or("SCAN_INTERVAL_SECS", 3),
            scan_top_n: env_or("SCAN_TOP_N", 7),
            rust_log: env::var("RUST_LOG").ok(),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
