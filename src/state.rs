//! Shared dashboard state
//!
//! One logical writer per substate: the live feed task advances the
//! metrics window, the scanner task refreshes the top list, the UI task
//! moves the selection. All mutation happens on discrete ticks or
//! selection events, behind a single `Arc<RwLock<DashboardState>>`.

use crate::config::Config;
use crate::live::feed::LiveFeed;
use crate::market::catalog::{AssetCatalog, AssetProfile};
use crate::market::rng::RandomSource;
use crate::market::trend::{self, AssetSummary};
use crate::scanner::ScannerReading;
use chrono::Utc;

pub struct DashboardState {
    catalog: AssetCatalog,
    selected: usize,
    live: LiveFeed,
    scanner_top: Vec<ScannerReading>,
    scan_count: u64,
}

impl DashboardState {
    /// Build the catalog and seed the live window, once per session
    pub fn new(config: &Config, rng: &mut dyn RandomSource) -> Self {
        Self {
            catalog: AssetCatalog::generate(rng),
            selected: 0,
            live: LiveFeed::new(rng, config.live_window_capacity, Utc::now()),
            scanner_top: Vec::new(),
            scan_count: 0,
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// The asset the UI currently has selected
    pub fn selected(&self) -> &AssetProfile {
        &self.catalog.all()[self.selected]
    }

    /// Select by id; unknown ids leave the selection unchanged
    pub fn select(&mut self, id: &str) -> bool {
        match self.catalog.all().iter().position(|asset| asset.id == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.catalog.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.catalog.len() - 1) % self.catalog.len();
    }

    /// Detection, trend and headline for the selected asset
    pub fn selected_summary(&self) -> AssetSummary {
        let asset = self.selected();
        trend::summarize(asset.tier, &asset.history)
    }

    /// Regenerate every asset history wholesale; selection is kept
    pub fn regenerate_catalog(&mut self, rng: &mut dyn RandomSource) {
        self.catalog.regenerate(rng);
    }

    pub fn live(&self) -> &LiveFeed {
        &self.live
    }

    pub fn live_mut(&mut self) -> &mut LiveFeed {
        &mut self.live
    }

    pub fn scanner_top(&self) -> &[ScannerReading] {
        &self.scanner_top
    }

    pub fn set_scanner_top(&mut self, readings: Vec<ScannerReading>) {
        self.scanner_top = readings;
        self.scan_count += 1;
    }

    /// Number of completed watchlist scans this session
    pub fn scan_count(&self) -> u64 {
        self.scan_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::rng::ThreadRngSource;

    fn test_config() -> Config {
        Config {
            live_window_capacity: 10,
            live_tick_secs: 60,
            scan_interval_secs: 3,
            scan_top_n: 7,
            rust_log: None,
        }
    }

    #[test]
    fn test_selection_cycles_through_catalog() {
        let mut rng = ThreadRngSource::new();
        let mut state = DashboardState::new(&test_config(), &mut rng);

        assert_eq!(state.selected().id, "btc");
        state.select_next();
        assert_eq!(state.selected().id, "eth");
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected().id, "grok");

        assert!(state.select("pepe"));
        assert_eq!(state.selected().id, "pepe");
        assert!(!state.select("doge"));
        assert_eq!(state.selected().id, "pepe");
    }

    #[test]
    fn test_selected_summary_matches_tier() {
        let mut rng = ThreadRngSource::new();
        let mut state = DashboardState::new(&test_config(), &mut rng);

        state.select("btc");
        assert_eq!(state.selected_summary().pattern.title, "Stable Growth Pattern");

        state.select("sol");
        assert_eq!(
            state.selected_summary().pattern.title,
            "Volatile Market Pattern"
        );
    }

    #[test]
    fn test_scanner_results_replace_wholesale() {
        let mut rng = ThreadRngSource::new();
        let mut state = DashboardState::new(&test_config(), &mut rng);

        assert_eq!(state.scan_count(), 0);
        state.set_scanner_top(crate::scanner::scan(&mut rng, 7));
        assert_eq!(state.scanner_top().len(), 7);
        assert_eq!(state.scan_count(), 1);
    }
}
