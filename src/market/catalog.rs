//! Asset catalog built from the pattern generators
//!
//! Built exactly once at startup by an explicit constructor and owned by
//! the application state; the only mutation afterwards is wholesale
//! regeneration.

use super::patterns::{self, PumpShape, RiskProfile};
use super::rng::RandomSource;
use super::types::{PricePoint, RiskTier};
use serde::Serialize;

/// A configured asset with its generated price/risk history
#[derive(Debug, Clone, Serialize)]
pub struct AssetProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub tier: RiskTier,
    pub history: Vec<PricePoint>,
}

/// Fixed, ordered set of tracked assets
pub struct AssetCatalog {
    assets: Vec<AssetProfile>,
}

impl AssetCatalog {
    /// Generate histories for every configured asset
    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        Self {
            assets: build_assets(rng),
        }
    }

    /// All assets in configuration order
    pub fn all(&self) -> &[AssetProfile] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&AssetProfile> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    /// History of one asset, for chart consumption
    pub fn select(&self, id: &str) -> Option<&[PricePoint]> {
        self.get(id).map(|asset| asset.history.as_slice())
    }

    /// Replace every history wholesale: same assets, fresh numbers
    pub fn regenerate(&mut self, rng: &mut dyn RandomSource) {
        self.assets = build_assets(rng);
    }
}

/// The reference configuration: two low-, two medium-, three high-risk
/// assets
fn build_assets(rng: &mut dyn RandomSource) -> Vec<AssetProfile> {
    vec![
        AssetProfile {
            id: "btc",
            name: "Bitcoin (BTC)",
            color: "#f7931a",
            tier: RiskTier::Low,
            history: patterns::stable_growth(rng, 42000.0, 0.15),
        },
        AssetProfile {
            id: "eth",
            name: "Ethereum (ETH)",
            color: "#627eea",
            tier: RiskTier::Low,
            history: patterns::stable_growth(rng, 2500.0, 0.18),
        },
        AssetProfile {
            id: "sol",
            name: "Solana (SOL)",
            color: "#00FFA3",
            tier: RiskTier::Medium,
            history: patterns::volatile_cycle(rng, 120.0, 0.25),
        },
        AssetProfile {
            id: "avax",
            name: "AVAX",
            color: "#E84142",
            tier: RiskTier::Medium,
            history: patterns::volatile_cycle(rng, 35.0, 0.28),
        },
        AssetProfile {
            id: "pepe",
            name: "PEPE",
            color: "#26A17B",
            tier: RiskTier::High,
            history: patterns::pump_and_dump(
                rng,
                0.0000254,
                0.65,
                PumpShape {
                    pump_start: 1,
                    pump_peak: 3,
                    dump_start: 4,
                },
                RiskProfile {
                    base_risk: 65.0,
                    risk_severity: 8.0,
                },
            ),
        },
        AssetProfile {
            id: "moon",
            name: "MOON",
            color: "#FF4B4B",
            tier: RiskTier::High,
            history: patterns::pump_and_dump(
                rng,
                0.00135,
                0.85,
                PumpShape {
                    pump_start: 3,
                    pump_peak: 5,
                    dump_start: 6,
                },
                RiskProfile {
                    base_risk: 72.0,
                    risk_severity: 10.0,
                },
            ),
        },
        AssetProfile {
            id: "grok",
            name: "GrokCoin (GROK)",
            color: "#8A2BE2",
            tier: RiskTier::High,
            history: patterns::pump_and_dump(
                rng,
                0.00074,
                0.95,
                PumpShape {
                    pump_start: 2,
                    pump_peak: 4,
                    dump_start: 5,
                },
                RiskProfile {
                    base_risk: 78.0,
                    risk_severity: 12.0,
                },
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::rng::ThreadRngSource;
    use crate::market::types::HISTORY_PERIODS;

    #[test]
    fn test_catalog_shape() {
        let mut rng = ThreadRngSource::new();
        let catalog = AssetCatalog::generate(&mut rng);

        assert_eq!(catalog.len(), 7);

        let ids: Vec<&str> = catalog.all().iter().map(|a| a.id).collect();
        assert_eq!(ids, ["btc", "eth", "sol", "avax", "pepe", "moon", "grok"]);

        let low = catalog.all().iter().filter(|a| a.tier == RiskTier::Low).count();
        let medium = catalog
            .all()
            .iter()
            .filter(|a| a.tier == RiskTier::Medium)
            .count();
        let high = catalog.all().iter().filter(|a| a.tier == RiskTier::High).count();
        assert_eq!((low, medium, high), (2, 2, 3));

        for asset in catalog.all() {
            assert_eq!(asset.history.len(), HISTORY_PERIODS);
        }
    }

    #[test]
    fn test_lookup_and_select() {
        let mut rng = ThreadRngSource::new();
        let catalog = AssetCatalog::generate(&mut rng);

        assert_eq!(catalog.get("sol").unwrap().name, "Solana (SOL)");
        assert_eq!(catalog.select("btc").unwrap().len(), HISTORY_PERIODS);
        assert!(catalog.get("doge").is_none());
        assert!(catalog.select("doge").is_none());
    }

    #[test]
    fn test_regenerate_keeps_structure() {
        let mut rng = ThreadRngSource::new();
        let mut catalog = AssetCatalog::generate(&mut rng);

        let ids_before: Vec<&str> = catalog.all().iter().map(|a| a.id).collect();
        catalog.regenerate(&mut rng);
        let ids_after: Vec<&str> = catalog.all().iter().map(|a| a.id).collect();

        assert_eq!(ids_before, ids_after);
        for asset in catalog.all() {
            assert_eq!(asset.history.len(), HISTORY_PERIODS);
        }
    }
}
